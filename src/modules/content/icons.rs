//! Icon lookup by string key.
//!
//! Content and course data refer to icons by name. Keys resolve to a closed
//! `IconName` set; anything unknown renders the fallback glyph instead of
//! failing.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    BookOpen,
    Clock,
    Users,
    Award,
    Star,
    PlayCircle,
    CheckCircle,
    ArrowRight,
    Mail,
    Search,
    Fallback,
}

/// Draws a glyph at the requested pixel size
pub type RenderHandler = fn(u32) -> IconGlyph;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconGlyph {
    pub name: &'static str,
    pub path: &'static str,
    pub size: u32,
}

impl IconGlyph {
    const fn new(name: &'static str, path: &'static str, size: u32) -> Self {
        Self { name, path, size }
    }

    pub fn to_svg(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" data-icon="{name}"><path d="{path}"/></svg>"#,
            size = self.size,
            name = self.name,
            path = self.path
        )
    }
}

pub const DEFAULT_ICON_SIZE: u32 = 24;

fn book_open(size: u32) -> IconGlyph {
    IconGlyph::new(
        "book-open",
        "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2zM22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
        size,
    )
}

fn clock(size: u32) -> IconGlyph {
    IconGlyph::new(
        "clock",
        "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20zM12 6v6l4 2",
        size,
    )
}

fn users(size: u32) -> IconGlyph {
    IconGlyph::new(
        "users",
        "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8M23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75",
        size,
    )
}

fn award(size: u32) -> IconGlyph {
    IconGlyph::new(
        "award",
        "M12 1a7 7 0 1 0 0 14a7 7 0 1 0 0-14M8.21 13.89L7 23l5-3l5 3l-1.21-9.12",
        size,
    )
}

fn star(size: u32) -> IconGlyph {
    IconGlyph::new(
        "star",
        "M12 2l3.09 6.26L22 9.27l-5 4.87l1.18 6.88L12 17.77l-6.18 3.25L7 14.14L2 9.27l6.91-1.01z",
        size,
    )
}

fn play_circle(size: u32) -> IconGlyph {
    IconGlyph::new(
        "play-circle",
        "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20zM10 8l6 4l-6 4z",
        size,
    )
}

fn check_circle(size: u32) -> IconGlyph {
    IconGlyph::new(
        "check-circle",
        "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4L12 14.01l-3-3",
        size,
    )
}

fn arrow_right(size: u32) -> IconGlyph {
    IconGlyph::new("arrow-right", "M5 12h14M12 5l7 7l-7 7", size)
}

fn mail(size: u32) -> IconGlyph {
    IconGlyph::new(
        "mail",
        "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2zM22 6l-10 7L2 6",
        size,
    )
}

fn search(size: u32) -> IconGlyph {
    IconGlyph::new(
        "search",
        "M11 3a8 8 0 1 0 0 16a8 8 0 1 0 0-16zM21 21l-4.35-4.35",
        size,
    )
}

fn fallback(size: u32) -> IconGlyph {
    IconGlyph::new(
        "help-circle",
        "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20zM9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3M12 17h.01",
        size,
    )
}

static HANDLERS: [(IconName, &str, RenderHandler); 11] = [
    (IconName::BookOpen, "book-open", book_open),
    (IconName::Clock, "clock", clock),
    (IconName::Users, "users", users),
    (IconName::Award, "award", award),
    (IconName::Star, "star", star),
    (IconName::PlayCircle, "play-circle", play_circle),
    (IconName::CheckCircle, "check-circle", check_circle),
    (IconName::ArrowRight, "arrow-right", arrow_right),
    (IconName::Mail, "mail", mail),
    (IconName::Search, "search", search),
    (IconName::Fallback, "fallback", fallback),
];

impl IconName {
    /// Resolve a key such as `"book-open"`, `"BookOpen"` or `"book_open"`.
    /// Unknown keys resolve to `IconName::Fallback`.
    pub fn resolve(key: &str) -> IconName {
        let normalized = normalize_key(key);
        HANDLERS
            .iter()
            .find(|(_, name, _)| *name == normalized)
            .map(|(icon, _, _)| *icon)
            .unwrap_or(IconName::Fallback)
    }

    pub fn as_str(&self) -> &'static str {
        self.entry().1
    }

    pub fn handler(&self) -> RenderHandler {
        self.entry().2
    }

    pub fn render(&self, size: u32) -> IconGlyph {
        (self.handler())(size)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, IconName::Fallback)
    }

    fn entry(&self) -> &'static (IconName, &'static str, RenderHandler) {
        // Every variant has a row; the last row is the fallback
        HANDLERS
            .iter()
            .find(|(icon, _, _)| icon == self)
            .unwrap_or(&HANDLERS[HANDLERS.len() - 1])
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve and render in one step, at the default size
pub fn render_icon(key: &str) -> IconGlyph {
    IconName::resolve(key).render(DEFAULT_ICON_SIZE)
}

/// `BookOpen` / `book_open` / ` Book-Open ` -> `book-open`
fn normalize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.trim().chars().enumerate() {
        if c == '_' || c == ' ' {
            out.push('-');
        } else if c.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_key_forms() {
        assert_eq!(IconName::resolve("book-open"), IconName::BookOpen);
        assert_eq!(IconName::resolve("BookOpen"), IconName::BookOpen);
        assert_eq!(IconName::resolve("book_open"), IconName::BookOpen);
        assert_eq!(IconName::resolve("  clock "), IconName::Clock);
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(IconName::resolve("rocket"), IconName::Fallback);
        assert_eq!(IconName::resolve(""), IconName::Fallback);
        assert!(IconName::resolve("<script>").is_fallback());

        let glyph = render_icon("does-not-exist");
        assert_eq!(glyph.name, "help-circle");
    }

    #[test]
    fn test_every_variant_has_a_handler() {
        for (icon, name, _) in HANDLERS.iter() {
            assert_eq!(icon.as_str(), *name);
            assert_eq!(IconName::resolve(name), *icon);
            assert!(!icon.render(16).path.is_empty());
        }
    }

    #[test]
    fn test_render_sets_size_and_svg() {
        let glyph = IconName::Star.render(32);
        assert_eq!(glyph.size, 32);
        let svg = glyph.to_svg();
        assert!(svg.contains(r#"width="32""#));
        assert!(svg.contains(r#"data-icon="star""#));
    }
}
