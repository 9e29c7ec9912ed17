//! Animated properties as inline CSS

use smallvec::SmallVec;
use talangin_core::PropertySet;

/// Inline style declarations for an element's animated state
///
/// `props` must be the element's full written state, since translation,
/// scale and rotation share one `transform` declaration.
pub fn declarations(props: &PropertySet) -> SmallVec<[(&'static str, String); 4]> {
    let mut out = SmallVec::new();
    if let Some(opacity) = props.opacity {
        out.push(("opacity", format_number(opacity)));
    }
    if let Some(transform) = transform(props) {
        out.push(("transform", transform));
    }
    if let Some(blur) = props.blur {
        out.push(("filter", format!("blur({}px)", format_number(blur))));
    }
    if let Some(width) = props.width {
        out.push(("width", format!("{}%", format_number(width))));
    }
    out
}

fn transform(props: &PropertySet) -> Option<String> {
    if props.x.is_none() && props.y.is_none() && props.scale.is_none() && props.rotation.is_none() {
        return None;
    }
    let x = props.x.unwrap_or(0.0);
    let y = props.y.unwrap_or(0.0);
    let scale = props.scale.unwrap_or(1.0);
    let rotation = props.rotation.unwrap_or(0.0);
    if x == 0.0 && y == 0.0 && scale == 1.0 && rotation == 0.0 {
        return Some("none".to_string());
    }
    Some(format!(
        "translate({}px, {}px) scale({}) rotate({}deg)",
        format_number(x),
        format_number(y),
        format_number(scale),
        format_number(rotation)
    ))
}

/// Up to 4 decimals, trailing zeros dropped
fn format_number(value: f32) -> String {
    let text = format!("{:.4}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(decls: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        decls.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_initial_fade_up() {
        let decls = declarations(&PropertySet::new().opacity(0.0).y(30.0));
        assert_eq!(lookup(&decls, "opacity"), Some("0"));
        assert_eq!(
            lookup(&decls, "transform"),
            Some("translate(0px, 30px) scale(1) rotate(0deg)")
        );
        assert_eq!(lookup(&decls, "filter"), None);
    }

    #[test]
    fn test_visible_is_identity() {
        let decls = declarations(&PropertySet::visible());
        assert_eq!(lookup(&decls, "opacity"), Some("1"));
        assert_eq!(lookup(&decls, "transform"), Some("none"));
        assert_eq!(lookup(&decls, "filter"), Some("blur(0px)"));
    }

    #[test]
    fn test_progress_bar_width() {
        let decls = declarations(&PropertySet::new().width(37.5));
        assert_eq!(decls.as_slice(), &[("width", "37.5%".to_string())]);
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(0.9), "0.9");
        assert_eq!(format_number(-0.00001), "0");
        assert_eq!(format_number(-12.5), "-12.5");
        assert_eq!(format_number(100.0), "100");
    }
}
