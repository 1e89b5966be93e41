//! The board page: list and detail views.
//!
//! [`BoardClient`] drives three containers on the host page:
//!
//! ```text
//! #board-list               wrapper shown while browsing the list
//! └── #board-table-container  the list table (or the index error panel)
//! #board-detail             the selected post (or its error panel)
//! ```
//!
//! ## States
//!
//! - **List** (initial): [`BoardClient::load_index`] fetches the index,
//!   re-sorts it into board order and renders one row per post.
//! - **Detail**: [`BoardClient::select`] looks the id up in the loaded
//!   [`Board`], fetches the post body and renders it with its attachments.
//! - [`BoardClient::back`] returns to the list and scrolls to the top.
//!
//! Fetch failures never escape: they are logged and rendered as an inline
//! error panel. The detail panel names the URL that failed and always offers
//! the way back to the list. Callers that need to know can ask
//! [`BoardClient::detail_error`].
//!
//! ## Bodies
//!
//! Post files are fetched as written, so a leading front matter block is
//! dropped before rendering. Markdown bodies (`.md`, `.markdown`) go through
//! the injected [`MarkdownRenderer`]. Anything else is an authored HTML
//! fragment and is inserted as-is, without sanitization: post files are
//! trusted content written by the site's maintainers.

use crate::dom::Document;
use crate::fetch::{Fetch, FetchError};
use crate::frontmatter;
use crate::markdown::MarkdownRenderer;
use crate::order;
use crate::paths::PathResolver;
use crate::types::{PINNED_NOTICE, PostRecord};
use maud::{Markup, PreEscaped, html};
use thiserror::Error;

pub const LIST_ROOT: &str = "board-list";
pub const TABLE_ROOT: &str = "board-table-container";
pub const DETAIL_ROOT: &str = "board-detail";
pub const REQUIRED_ELEMENTS: [&str; 3] = [LIST_ROOT, TABLE_ROOT, DETAIL_ROOT];

const MARKDOWN_EXTENSIONS: &[&str] = &[".md", ".markdown"];

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Missing required elements: {}", .0.join(", "))]
    MissingElements(Vec<String>),
}

#[derive(Error, Debug)]
pub enum IndexLoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Invalid index JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why the detail view shows an error panel instead of a post.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    #[error("Post {id} has no contentfile")]
    MissingContentfile { id: String },
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Which view is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    List,
    Detail { id: String },
}

/// The loaded index. Written once per load, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    records: Vec<PostRecord>,
}

impl Board {
    pub fn new(records: Vec<PostRecord>) -> Self {
        Self { records }
    }

    /// Parse index JSON. A document that is not an array is an empty board.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if !value.is_array() {
            tracing::warn!("board index is not a JSON array; showing an empty board");
            return Ok(Self::default());
        }
        Ok(Self::new(serde_json::from_value(value)?))
    }

    /// Records in index order.
    pub fn records(&self) -> &[PostRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in board order.
    pub fn ordered(&self) -> Vec<&PostRecord> {
        let mut ordered: Vec<&PostRecord> = self.records.iter().collect();
        ordered.sort_by(|a, b| order::compare(a, b));
        ordered
    }

    /// The first record with `id`.
    pub fn find(&self, id: &str) -> Option<&PostRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

pub struct BoardClient<F: Fetch> {
    document: Document,
    fetcher: F,
    renderer: Box<dyn MarkdownRenderer>,
    resolver: PathResolver,
    board: Board,
    view: View,
    detail_error: Option<DetailError>,
}

impl<F: Fetch> BoardClient<F> {
    /// Attach to a page. Fails when any board container is missing.
    pub fn mount(
        mut document: Document,
        fetcher: F,
        renderer: Box<dyn MarkdownRenderer>,
        resolver: PathResolver,
    ) -> Result<Self, ClientError> {
        let missing: Vec<String> = REQUIRED_ELEMENTS
            .iter()
            .filter(|id| !document.contains(id))
            .map(|id| format!("#{id}"))
            .collect();
        if !missing.is_empty() {
            tracing::error!(missing = %missing.join(", "), "board containers not found");
            return Err(ClientError::MissingElements(missing));
        }

        if let Some(detail) = document.get_mut(DETAIL_ROOT) {
            detail.hide();
        }
        if let Some(list) = document.get_mut(LIST_ROOT) {
            list.show();
        }

        Ok(Self {
            document,
            fetcher,
            renderer,
            resolver,
            board: Board::default(),
            view: View::List,
            detail_error: None,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// The error behind the detail panel currently on screen, if any.
    pub fn detail_error(&self) -> Option<&DetailError> {
        self.detail_error.as_ref()
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Fetch the index and render the list. On failure the error panel is
    /// rendered in place of the table and the error is also returned.
    pub fn load_index(&mut self) -> Result<usize, IndexLoadError> {
        let url = self.resolver.index_url();
        let loaded = self
            .fetcher
            .fetch_text(&url)
            .map_err(IndexLoadError::from)
            .and_then(|text| Board::from_json(&text).map_err(IndexLoadError::from));

        match loaded {
            Ok(board) => {
                tracing::info!(posts = board.len(), %url, "loaded board index");
                self.board = board;
                let list = render_list(&self.board.ordered());
                self.set_html(TABLE_ROOT, list);
                Ok(self.board.len())
            }
            Err(err) => {
                tracing::error!(%url, error = %err, "failed to load board index");
                self.set_html(TABLE_ROOT, render_index_error(&err.to_string()));
                Err(err)
            }
        }
    }

    /// Open the post with `id`. Unknown ids are ignored and return `false`.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(record) = self.board.find(id).cloned() else {
            tracing::debug!(%id, "no post with this id");
            return false;
        };
        self.show_detail(&record);
        true
    }

    /// Render the detail view for `record`.
    pub fn show_detail(&mut self, record: &PostRecord) {
        let contentfile = self.resolver.normalize_contentfile(&record.contentfile);
        let Some(url) = self.resolver.content_url(contentfile) else {
            tracing::warn!(id = %record.id, "post has no contentfile");
            self.open_detail(&record.id, render_missing_contentfile());
            self.detail_error = Some(DetailError::MissingContentfile {
                id: record.id.clone(),
            });
            return;
        };

        let (markup, error): (Markup, Option<DetailError>) = match self.fetcher.fetch_text(&url) {
            Ok(text) => {
                // HTML bodies lose their header too; the rest is inserted as fetched.
                let source = strip_front_matter(&text);
                let body = if is_markdown(contentfile) {
                    self.renderer.render(source)
                } else {
                    source.to_string()
                };
                let attachments = render_attachments(record, &self.resolver);
                (render_detail(record, &body, attachments), None)
            }
            Err(err) => {
                tracing::error!(id = %record.id, %url, error = %err, "failed to load post body");
                (render_detail_error(&err.to_string(), &url), Some(err.into()))
            }
        };
        self.open_detail(&record.id, markup);
        self.detail_error = error;
    }

    /// Return to the list, scrolled to the top.
    pub fn back(&mut self) {
        if let Some(detail) = self.document.get_mut(DETAIL_ROOT) {
            detail.hide();
        }
        if let Some(list) = self.document.get_mut(LIST_ROOT) {
            list.show();
        }
        self.document.viewport.scroll_to_top();
        self.view = View::List;
        self.detail_error = None;
    }

    fn open_detail(&mut self, id: &str, markup: Markup) {
        self.set_html(DETAIL_ROOT, markup);
        if let Some(list) = self.document.get_mut(LIST_ROOT) {
            list.hide();
        }
        if let Some(detail) = self.document.get_mut(DETAIL_ROOT) {
            detail.show();
        }
        self.view = View::Detail { id: id.to_string() };
    }

    fn set_html(&mut self, id: &str, markup: Markup) {
        if let Some(element) = self.document.get_mut(id) {
            element.set_html(markup.into_string());
        }
    }
}

/// The body below a post's front matter. Unparsable headers are left in.
fn strip_front_matter(text: &str) -> &str {
    match frontmatter::parse(text) {
        Ok((_, body)) => body,
        Err(_) => text,
    }
}

fn is_markdown(contentfile: &str) -> bool {
    let lower = contentfile.to_lowercase();
    MARKDOWN_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

// ============================================================================
// HTML Components
// ============================================================================

fn number_cell(record: &PostRecord) -> &str {
    if record.is_pinned() {
        PINNED_NOTICE
    } else {
        &record.id
    }
}

fn header_row() -> Markup {
    html! {
        tr {
            th style="width:80px" { "번호" }
            th { "제목" }
            th { "작성자" }
            th { "등록일" }
        }
    }
}

/// The list table, one row per record in the given order.
pub fn render_list(records: &[&PostRecord]) -> Markup {
    html! {
        table class="table table-hover" {
            thead { (header_row()) }
            tbody {
                @for record in records {
                    tr class=[record.is_pinned().then_some("table-secondary")] {
                        td style="width:80px" { (number_cell(record)) }
                        td {
                            a href="#" class="board-link" data-id=(record.id) { (record.title) }
                        }
                        td { (record.author) }
                        td { (record.date) }
                    }
                }
            }
        }
    }
}

/// Attachment links, or `None` when no attachment yields a link.
pub fn render_attachments(record: &PostRecord, resolver: &PathResolver) -> Option<Markup> {
    let links: Vec<(String, String)> = record
        .attachments
        .iter()
        .filter_map(|attachment| {
            let link = attachment.link()?;
            Some((resolver.href(link.url), link.label))
        })
        .collect();
    if links.is_empty() {
        return None;
    }
    Some(html! {
        hr;
        p {
            strong { "첨부파일:" }
            br;
            @for (i, (href, label)) in links.iter().enumerate() {
                @if i > 0 { br; }
                a href=(href) target="_blank" rel="noopener" { (label) }
            }
        }
    })
}

fn back_button() -> Markup {
    html! {
        button id="back-button" class="btn btn-secondary" { "← 목록으로" }
    }
}

/// The detail view. `body_html` is inserted without escaping.
pub fn render_detail(record: &PostRecord, body_html: &str, attachments: Option<Markup>) -> Markup {
    html! {
        table class="table table-hover mb-4" {
            thead { (header_row()) }
            tbody {
                tr class=[record.is_pinned().then_some("table-secondary")] {
                    td { (number_cell(record)) }
                    td { (record.title) }
                    td { (record.author) }
                    td { (record.date) }
                }
            }
        }
        div class="card mb-4" {
            div class="card-body" {
                (PreEscaped(body_html))
                @if let Some(attachments) = attachments {
                    (attachments)
                }
            }
        }
        (back_button())
    }
}

pub fn render_index_error(message: &str) -> Markup {
    html! {
        div class="alert alert-danger" role="alert" {
            "게시글 목록을 불러오지 못했습니다."
            br;
            code { (message) }
        }
    }
}

pub fn render_detail_error(message: &str, url: &str) -> Markup {
    html! {
        div class="alert alert-danger" role="alert" {
            div { "본문을 불러올 수 없습니다." }
            div { code { (message) } }
            div class="mt-2 small" {
                "요청 URL: "
                code { (url) }
            }
        }
        (back_button())
    }
}

pub fn render_missing_contentfile() -> Markup {
    html! {
        p class="text-danger" { "contentfile이 비어있습니다." }
        (back_button())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::{CmarkRenderer, PlainTextRenderer};
    use crate::test_helpers::{StaticFetcher, board_document, pinned, record, row_ids};
    use crate::types::Attachment;

    fn client(fetcher: StaticFetcher) -> BoardClient<StaticFetcher> {
        BoardClient::mount(
            board_document(),
            fetcher,
            Box::new(CmarkRenderer),
            PathResolver::with_base(""),
        )
        .unwrap()
    }

    fn index_json(records: &[PostRecord]) -> String {
        serde_json::to_string(records).unwrap()
    }

    fn html_of<'a, F: Fetch>(client: &'a BoardClient<F>, id: &str) -> &'a str {
        &client.document().get(id).unwrap().html
    }

    fn visible<F: Fetch>(client: &BoardClient<F>, id: &str) -> bool {
        client.document().get(id).unwrap().visible
    }

    #[test]
    fn mount_requires_all_containers() {
        let document = Document::with_elements([LIST_ROOT, DETAIL_ROOT]);
        let result = BoardClient::mount(
            document,
            StaticFetcher::default(),
            Box::new(PlainTextRenderer),
            PathResolver::with_base(""),
        );
        match result {
            Err(ClientError::MissingElements(missing)) => {
                assert_eq!(missing, vec!["#board-table-container".to_string()])
            }
            Ok(_) => panic!("mount succeeded without the table container"),
        }
    }

    #[test]
    fn mount_starts_on_the_list() {
        let client = client(StaticFetcher::default());
        assert_eq!(client.view(), &View::List);
        assert!(visible(&client, LIST_ROOT));
        assert!(!visible(&client, DETAIL_ROOT));
    }

    #[test]
    fn list_renders_in_board_order() {
        let records = vec![record("1", "2024-01-01"), record("2", "2024-02-01")];
        let fetcher = StaticFetcher::default().with("/data/posts.json", &index_json(&records));
        let mut client = client(fetcher);

        assert_eq!(client.load_index().unwrap(), 2);
        assert_eq!(row_ids(html_of(&client, TABLE_ROOT)), ["2", "1"]);
    }

    #[test]
    fn pinned_rows_are_marked() {
        let records = vec![record("7", "2024-05-01"), pinned("3", "2023-01-01")];
        let fetcher = StaticFetcher::default().with("/data/posts.json", &index_json(&records));
        let mut client = client(fetcher);
        client.load_index().unwrap();

        let html = html_of(&client, TABLE_ROOT);
        assert_eq!(row_ids(html), ["3", "7"]);
        assert!(html.contains("<tr class=\"table-secondary\"><td style=\"width:80px\">공지</td>"));
        assert!(html.contains("<td style=\"width:80px\">7</td>"));
    }

    #[test]
    fn list_escapes_titles() {
        let mut r = record("1", "2024-01-01");
        r.title = "<b>bold</b>".into();
        let fetcher = StaticFetcher::default().with("/data/posts.json", &index_json(&[r]));
        let mut client = client(fetcher);
        client.load_index().unwrap();
        assert!(html_of(&client, TABLE_ROOT).contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn index_fetch_failure_renders_error_panel() {
        let mut client = client(StaticFetcher::default());
        let err = client.load_index().unwrap_err();
        assert!(matches!(err, IndexLoadError::Fetch(FetchError::Status { status: 404, .. })));

        let html = html_of(&client, TABLE_ROOT);
        assert!(html.contains("alert-danger"));
        assert!(html.contains("게시글 목록을 불러오지 못했습니다."));
        assert!(html.contains("HTTP 404 for /data/posts.json"));
        assert!(client.board().is_empty());
    }

    #[test]
    fn invalid_index_json_renders_error_panel() {
        let fetcher = StaticFetcher::default().with("/data/posts.json", "{not json");
        let mut client = client(fetcher);
        assert!(matches!(client.load_index(), Err(IndexLoadError::Json(_))));
        assert!(html_of(&client, TABLE_ROOT).contains("alert-danger"));
    }

    #[test]
    fn non_array_index_is_an_empty_board() {
        let fetcher = StaticFetcher::default().with("/data/posts.json", r#"{"posts": []}"#);
        let mut client = client(fetcher);
        assert_eq!(client.load_index().unwrap(), 0);
        assert!(row_ids(html_of(&client, TABLE_ROOT)).is_empty());
    }

    #[test]
    fn index_url_uses_base_path() {
        let fetcher = StaticFetcher::default().with("/repo/data/posts.json", "[]");
        let mut client = BoardClient::mount(
            board_document(),
            fetcher,
            Box::new(CmarkRenderer),
            PathResolver::with_base("/repo"),
        )
        .unwrap();
        assert_eq!(client.load_index().unwrap(), 0);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let fetcher = StaticFetcher::default()
            .with("/data/posts.json", &index_json(&[record("1", "2024-01-01")]));
        let mut client = client(fetcher);
        client.load_index().unwrap();
        assert!(!client.select("404"));
        assert_eq!(client.view(), &View::List);
    }

    #[test]
    fn markdown_body_is_rendered() {
        let mut r = record("1", "2024-01-01");
        r.contentfile = "1.md".into();
        let fetcher = StaticFetcher::default()
            .with("/data/posts.json", &index_json(&[r]))
            .with("/data/posts/1.md", "# 안내\n\n본문");
        let mut client = client(fetcher);
        client.load_index().unwrap();

        assert!(client.select("1"));
        assert_eq!(client.view(), &View::Detail { id: "1".into() });
        assert!(!visible(&client, LIST_ROOT));
        assert!(visible(&client, DETAIL_ROOT));
        let html = html_of(&client, DETAIL_ROOT);
        assert!(html.contains("<h1>안내</h1>"));
        assert!(html.contains("id=\"back-button\""));
    }

    #[test]
    fn html_body_is_inserted_untransformed() {
        let mut r = record("1", "2024-01-01");
        r.contentfile = "data/posts/1.html".into();
        let body = "<p onclick=\"x()\">hello <em>there</em></p>";
        let fetcher = StaticFetcher::default()
            .with("/data/posts.json", &index_json(&[r]))
            .with("/data/posts/1.html", body);
        let mut client = client(fetcher);
        client.load_index().unwrap();
        client.select("1");
        assert!(html_of(&client, DETAIL_ROOT).contains(body));
    }

    #[test]
    fn missing_body_renders_error_with_url_and_working_back() {
        let mut r = record("1", "2024-01-01");
        r.contentfile = "gone.md".into();
        let fetcher = StaticFetcher::default().with("/data/posts.json", &index_json(&[r]));
        let mut client = client(fetcher);
        client.load_index().unwrap();
        client.document.viewport.scroll_top = 640;

        assert!(client.select("1"));
        let html = html_of(&client, DETAIL_ROOT);
        assert!(html.contains("본문을 불러올 수 없습니다."));
        assert!(html.contains("HTTP 404 for /data/posts/gone.md"));
        assert!(html.contains("<code>/data/posts/gone.md</code>"));
        assert!(html.contains("id=\"back-button\""));

        assert_eq!(
            client.detail_error(),
            Some(&DetailError::Fetch(FetchError::Status {
                status: 404,
                url: "/data/posts/gone.md".into()
            }))
        );

        client.back();
        assert_eq!(client.detail_error(), None);
        assert_eq!(client.view(), &View::List);
        assert!(visible(&client, LIST_ROOT));
        assert!(!visible(&client, DETAIL_ROOT));
        assert_eq!(client.document().viewport.scroll_top, 0);
    }

    #[test]
    fn network_failure_shows_message() {
        let mut r = record("1", "2024-01-01");
        r.contentfile = "1.md".into();
        let fetcher = StaticFetcher::default()
            .with("/data/posts.json", &index_json(&[r]))
            .failing(
                "/data/posts/1.md",
                FetchError::Network {
                    url: "/data/posts/1.md".into(),
                    message: "connection refused".into(),
                },
            );
        let mut client = client(fetcher);
        client.load_index().unwrap();

        client.select("1");
        let html = html_of(&client, DETAIL_ROOT);
        assert!(html.contains("connection refused"));
        assert!(html.contains("<code>/data/posts/1.md</code>"));
    }

    #[test]
    fn empty_contentfile_does_not_fetch() {
        let r = record("1", "2024-01-01");
        let fetcher = StaticFetcher::default().with("/data/posts.json", &index_json(&[r]));
        let mut client = client(fetcher);
        client.load_index().unwrap();

        client.select("1");
        assert!(html_of(&client, DETAIL_ROOT).contains("contentfile이 비어있습니다."));
        assert_eq!(client.fetcher.requests(), vec!["/data/posts.json".to_string()]);
        assert!(matches!(
            client.detail_error(),
            Some(DetailError::MissingContentfile { id }) if id == "1"
        ));
    }

    #[test]
    fn attachment_links_use_basename_and_base_path() {
        let mut r = record("1", "2024-01-01");
        r.contentfile = "1.html".into();
        r.attachments = vec![Attachment::Path("data/files/a.pdf".into())];
        let resolver = PathResolver::with_base("/repo");

        let markup = render_attachments(&r, &resolver).unwrap().into_string();
        assert_eq!(markup.matches("<a ").count(), 1);
        assert!(markup.contains(
            "<a href=\"/repo/data/files/a.pdf\" target=\"_blank\" rel=\"noopener\">a.pdf</a>"
        ));
    }

    #[test]
    fn attachment_links_are_separated_and_named() {
        let mut r = record("1", "2024-01-01");
        r.attachments = vec![
            Attachment::Named {
                name: Some("시간표".into()),
                url: "https://example.org/t.pdf".into(),
            },
            Attachment::Path("data/files/b.hwp".into()),
        ];
        let markup = render_attachments(&r, &PathResolver::with_base(""))
            .unwrap()
            .into_string();
        assert!(markup.contains(">시간표</a><br><a href=\"/data/files/b.hwp\""));
        assert!(markup.contains("href=\"https://example.org/t.pdf\""));
    }

    #[test]
    fn no_attachments_renders_no_block() {
        let mut r = record("1", "2024-01-01");
        r.contentfile = "1.html".into();
        assert!(render_attachments(&r, &PathResolver::with_base("")).is_none());

        let fetcher = StaticFetcher::default()
            .with("/data/posts.json", &index_json(&[r]))
            .with("/data/posts/1.html", "<p>x</p>");
        let mut client = client(fetcher);
        client.load_index().unwrap();
        client.select("1");
        assert!(!html_of(&client, DETAIL_ROOT).contains("첨부파일"));
    }

    #[test]
    fn later_selection_replaces_detail() {
        let mut a = record("1", "2024-01-01");
        a.contentfile = "1.html".into();
        let mut b = record("2", "2024-01-02");
        b.contentfile = "2.html".into();
        let fetcher = StaticFetcher::default()
            .with("/data/posts.json", &index_json(&[a, b]))
            .with("/data/posts/1.html", "<p>first</p>")
            .with("/data/posts/2.html", "<p>second</p>");
        let mut client = client(fetcher);
        client.load_index().unwrap();

        client.select("1");
        client.select("2");
        assert_eq!(client.detail_error(), None);
        let html = html_of(&client, DETAIL_ROOT);
        assert!(html.contains("second"));
        assert!(!html.contains("first"));
        assert_eq!(client.view(), &View::Detail { id: "2".into() });
    }

    #[test]
    fn duplicate_ids_resolve_to_first_record() {
        let mut first = record("dup", "2024-01-01");
        first.title = "first".into();
        let mut second = record("dup", "2024-05-01");
        second.title = "second".into();
        let board = Board::new(vec![first, second]);
        assert_eq!(board.find("dup").unwrap().title, "first");
        assert_eq!(board.ordered()[0].title, "second");
    }

    #[test]
    fn front_matter_is_not_rendered() {
        assert_eq!(strip_front_matter("---\ntitle: x\n---\n<p>body</p>"), "<p>body</p>");
        assert_eq!(strip_front_matter("<p>plain</p>"), "<p>plain</p>");
        assert_eq!(strip_front_matter("---\ntitle: [x\n---\nrest"), "---\ntitle: [x\n---\nrest");
    }

    #[test]
    fn markdown_detection_is_case_insensitive() {
        assert!(is_markdown("A.MD"));
        assert!(is_markdown("notes.markdown"));
        assert!(!is_markdown("page.html"));
        assert!(!is_markdown("readme.mdx"));
    }
}
