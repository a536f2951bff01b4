//! Presentation sink: splices converted HTML into a target element of an
//! HTML template.

use anyhow::{Result, bail};
use regex::Regex;

/// Replaces the inner HTML of the element carrying the given `id`.
///
/// The opening tag is located by id and the content runs to the first
/// closing tag with the same name, so the target element must not contain
/// nested elements of its own tag. A missing target aborts the request.
pub fn set_content(template: &str, target_id: &str, html: &str) -> Result<String> {
    let open_tag = Regex::new(&format!(
        r#"<([A-Za-z][A-Za-z0-9-]*)[^>]*\sid\s*=\s*"{}"[^>]*>"#,
        regex::escape(target_id)
    ))
    .expect("Invalid open tag regex");

    let Some(caps) = open_tag.captures(template) else {
        bail!("no element with id \"{target_id}\" in template");
    };
    let tag_name = &caps[1];
    let content_start = caps.get(0).map_or(0, |m| m.end());

    let closing = format!("</{tag_name}>");
    let Some(offset) = template[content_start..].find(&closing) else {
        bail!("element with id \"{target_id}\" (<{tag_name}>) is never closed");
    };
    let content_end = content_start + offset;

    Ok(format!(
        "{}{}{}",
        &template[..content_start],
        html,
        &template[content_end..]
    ))
}
