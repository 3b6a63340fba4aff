use super::page::PageName;
use crate::shared::validation::{FieldKind, FieldSpec, Schema, ValidationErrors};

pub const PAGE_SCHEMA: Schema = Schema {
    name: "content_page",
    error: "Invalid page",
    fields: &[FieldSpec::required("page", FieldKind::OneOf(PageName::NAMES))],
};

pub fn parse_page_name(raw: &str) -> Result<PageName, ValidationErrors> {
    PAGE_SCHEMA.parse_single("page", raw)?;
    raw.parse::<PageName>()
        .map_err(|e| ValidationErrors::new(PAGE_SCHEMA.error).with_field("page", e))
}
