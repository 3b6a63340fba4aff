//! Static content pages and the icon set they draw from.

pub mod icons;
pub mod page;
pub mod schemas;

pub use icons::{render_icon, IconGlyph, IconName, RenderHandler};
pub use page::PageName;
pub use schemas::{parse_page_name, PAGE_SCHEMA};
