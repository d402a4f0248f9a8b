//! The `pages` content collection: markdown documents whose front matter carries
//! the page title, the tweet text, and links to the design file and cover image.

use serde::Deserialize;

use crate::error::ContentError;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PageData {
    pub title: String,
    pub tweet: String,
    pub design: String,
    pub cover: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub id: String,
    pub data: PageData,
    pub body: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collection {
    entries: Vec<Page>,
}

impl Collection {
    /// Builds the collection from `(path, source)` pairs. Paths are relative to the
    /// collection base; anything that is not a `.md` file is skipped.
    pub fn from_documents<'a, I>(docs: I) -> Result<Self, ContentError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut entries = Vec::new();
        for (path, source) in docs {
            if let Some(id) = entry_id(path) {
                entries.push(parse_page(&id, source)?);
            }
        }
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(Self { entries })
    }

    /// Reads every `**/*.md` file under `base`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_dir(base: impl AsRef<std::path::Path>) -> Result<Self, ContentError> {
        let base = base.as_ref();
        let mut files = Vec::new();
        collect_markdown(base, base, &mut files)?;
        Self::from_documents(files.iter().map(|(p, s)| (p.as_str(), s.as_str())))
    }

    pub fn get(&self, id: &str) -> Option<&Page> {
        self.entries.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn collect_markdown(
    base: &std::path::Path,
    dir: &std::path::Path,
    out: &mut Vec<(String, String)>,
) -> Result<(), ContentError> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_markdown(base, &path, out)?;
        } else if path.extension().is_some_and(|e| e == "md") {
            let rel = path.strip_prefix(base).unwrap_or(&path);
            let rel = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            out.push((rel, std::fs::read_to_string(&path)?));
        }
    }
    Ok(())
}

/// `Blog/My Post!.md` -> `blog/my-post`. Returns `None` for non-markdown paths.
pub fn entry_id(path: &str) -> Option<String> {
    let path = path.trim_start_matches("./").replace('\\', "/");
    let stem = path.strip_suffix(".md")?;
    Some(stem.split('/').map(slugify).collect::<Vec<_>>().join("/"))
}

// Lowercase, spaces become `-`, punctuation is dropped.
fn slugify(segment: &str) -> String {
    segment
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
            _ => None,
        })
        .collect()
}

pub fn parse_page(id: &str, source: &str) -> Result<Page, ContentError> {
    let (front, body) = split_front_matter(source).ok_or_else(|| ContentError::MissingFrontMatter {
        id: id.to_string(),
    })?;
    let data = serde_yaml::from_str(front).map_err(|source| ContentError::Schema {
        id: id.to_string(),
        source,
    })?;
    Ok(Page {
        id: id.to_string(),
        data,
        body: body.to_string(),
    })
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == "---"
}

// Splits `---` fenced front matter from the body. Fences must be lines of their own.
fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let source = source.trim_start_matches('\u{feff}');
    let mut lines = source.split_inclusive('\n');
    let first = lines.next()?;
    if !is_fence(first) {
        return None;
    }
    let start = first.len();
    let mut offset = start;
    for line in lines {
        if is_fence(line) {
            return Some((&source[start..offset], &source[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLIDER: &str = "---\n\
title: Battery Slider\n\
tweet: \"Drag to charge: 72%\"\n\
design: 'https://example.com/design'\n\
cover: /covers/battery.png\n\
draft: true\n\
---\n\
Body text.\n";

    #[test]
    fn parses_front_matter_and_body() {
        let page = parse_page("battery-slider", SLIDER).unwrap();
        assert_eq!(page.data.title, "Battery Slider");
        assert_eq!(page.data.tweet, "Drag to charge: 72%");
        assert_eq!(page.data.design, "https://example.com/design");
        assert_eq!(page.data.cover, "/covers/battery.png");
        assert_eq!(page.body, "Body text.\n");
    }

    #[test]
    fn missing_field_is_schema_error() {
        let src = "---\ntitle: x\ntweet: y\ndesign: z\n---\n";
        let err = parse_page("p", src).unwrap_err();
        assert!(matches!(err, ContentError::Schema { .. }));
        assert!(err.to_string().contains("cover"), "{err}");
    }

    #[test]
    fn no_front_matter() {
        let err = parse_page("p", "# just markdown\n").unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontMatter { .. }));
        let err = parse_page("p", "---\ntitle: unterminated\n").unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontMatter { .. }));
    }

    #[test]
    fn invalid_yaml_is_schema_error() {
        let src = "---\ntitle: a\nnot a pair\n---\n";
        let err = parse_page("p", src).unwrap_err();
        assert!(matches!(err, ContentError::Schema { .. }), "{err:?}");
    }

    #[test]
    fn comments_blank_lines_and_crlf() {
        let src = "---\r\n# comment\r\n\r\ntitle: a\r\ntweet: b\r\ndesign: c\r\ncover: d\r\n---\r\nbody";
        let page = parse_page("p", src).unwrap();
        assert_eq!(page.data.cover, "d");
        assert_eq!(page.body, "body");
    }

    #[test]
    fn yaml_scalars_are_decoded() {
        let src = "---\n\
title: \"Say \\\"hi\\\"\"\n\
tweet: t # trailing comment\n\
design: >\n  long\n  text\n\
cover: 'it''s here'\n\
---\n";
        let page = parse_page("p", src).unwrap();
        assert_eq!(page.data.title, "Say \"hi\"");
        assert_eq!(page.data.tweet, "t");
        assert_eq!(page.data.design, "long text\n");
        assert_eq!(page.data.cover, "it's here");
        assert_eq!(page.body, "");
    }

    #[test]
    fn closing_fence_must_stand_alone() {
        let src = "---\ntitle: a\ntweet: |\n  ----\n  rule\ndesign: c\ncover: d\n---\nbody\n";
        let page = parse_page("p", src).unwrap();
        assert_eq!(page.data.tweet, "----\nrule\n");
        assert_eq!(page.body, "body\n");

        let err = parse_page("p", "---\ntitle: a\n----\nbody\n").unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontMatter { .. }));
    }

    #[test]
    fn fence_at_end_of_file() {
        let page = parse_page("p", "---\ntitle: a\ntweet: b\ndesign: c\ncover: d\n---").unwrap();
        assert_eq!(page.data.title, "a");
        assert_eq!(page.body, "");
    }

    #[test]
    fn ids_come_from_markdown_paths() {
        assert_eq!(entry_id("Battery-Slider.md").as_deref(), Some("battery-slider"));
        assert_eq!(entry_id("./2024/intro.md").as_deref(), Some("2024/intro"));
        assert_eq!(entry_id("notes.txt"), None);
    }

    #[test]
    fn ids_are_slugified_per_segment() {
        assert_eq!(entry_id("My Page.md").as_deref(), Some("my-page"));
        assert_eq!(entry_id("Drafts/Hello, World!.md").as_deref(), Some("drafts/hello-world"));
        assert_eq!(entry_id("snake_case v2.md").as_deref(), Some("snake_case-v2"));
    }

    #[test]
    fn collection_sorts_and_skips_other_files() {
        let b = SLIDER.replace("Battery Slider", "B");
        let c = Collection::from_documents([
            ("zeta.md", SLIDER),
            ("readme.txt", "not content"),
            ("alpha.md", b.as_str()),
        ])
        .unwrap();
        assert_eq!(c.len(), 2);
        let ids: Vec<_> = c.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["alpha", "zeta"]);
        assert_eq!(c.get("alpha").unwrap().data.title, "B");
        assert!(c.get("missing").is_none());
    }

    #[test]
    fn bundled_page_is_valid() {
        let page = parse_page("battery-slider", crate::components::app::BUNDLED_PAGE).unwrap();
        assert!(!page.data.title.is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn loads_from_disk() {
        let dir = std::env::temp_dir().join(format!("battery-slider-pages-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("one.md"), SLIDER).unwrap();
        std::fs::write(dir.join("nested").join("Two.md"), SLIDER).unwrap();
        std::fs::write(dir.join("skip.json"), "{}").unwrap();
        let c = Collection::load_dir(&dir).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        let ids: Vec<_> = c.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["nested/two", "one"]);
    }
}
