//! Shadow-root stylesheet
//!
//! Nothing from the page reaches these rules except the `--product-card-*`
//! custom properties, which inherit through the shadow boundary.

use super::state::ComponentState;

/// Viewport width at which the two blocks sit side by side
pub const WIDE_BREAKPOINT_PX: u32 = 750;
/// Share of the row taken by the content block in the wide layout
pub const CONTENT_WIDTH_PCT: u32 = 45;
/// Share of the row taken by the image block in the wide layout
pub const MEDIA_WIDTH_PCT: u32 = 55;

/// Custom properties the host page may set
pub const CUSTOM_PROPERTIES: &[&str] = &[
    "--product-card-font-family",
    "--product-card-text-color",
    "--product-card-price-color",
    "--product-card-border-color",
    "--product-card-radius",
    "--product-card-button-radius",
    "--product-card-badge-radius",
    "--product-card-error-color",
];

/// Keep attribute-supplied values inside a single declaration
pub fn css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\\'))
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn stylesheet(state: &ComponentState) -> String {
    let mut css = format!(
        r#"
:host {{
    display: block;
}}
.product-card {{
    display: flex;
    flex-direction: column;
    gap: 24px;
    box-sizing: border-box;
    font-family: var(--product-card-font-family, inherit);
    color: var(--product-card-text-color, #121212);
    border-radius: var(--product-card-radius, 8px);
    overflow: hidden;
}}
.product-card--bordered {{
    border: 1px solid var(--product-card-border-color, #e5e5e5);
    padding: 16px;
}}
.product-card__content {{
    display: flex;
    flex-direction: column;
    justify-content: center;
    gap: 12px;
    width: 100%;
}}
.product-card__media {{
    position: relative;
    width: 100%;
}}
.product-card__media-link {{
    display: block;
}}
::slotted([slot="hover-image"]) {{
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0;
    transition: opacity 0.3s ease;
}}
.product-card__media:hover ::slotted([slot="hover-image"]) {{
    opacity: 1;
}}
.product-card__link {{
    color: inherit;
    text-decoration: none;
}}
.product-card__image {{
    display: block;
    width: 100%;
    height: auto;
    aspect-ratio: 1 / 1;
    object-fit: cover;
    border-radius: var(--product-card-radius, 8px);
}}
.product-card__badge {{
    align-self: flex-start;
    padding: 4px 12px;
    font-size: 12px;
    font-weight: 600;
    letter-spacing: 0.04em;
    text-transform: uppercase;
    color: {badge_color};
    background: {badge_bg};
    border-radius: var(--product-card-badge-radius, 40px);
}}
.product-card__title {{
    margin: 0;
}}
.product-card__price {{
    margin: 0;
    font-weight: 600;
    color: var(--product-card-price-color, inherit);
}}
.product-card__description {{
    line-height: 1.5;
}}
.product-card__cta {{
    display: inline-flex;
    align-items: center;
    justify-content: center;
    align-self: flex-start;
    min-width: 160px;
    min-height: 48px;
    padding: 0 28px;
    box-sizing: border-box;
    color: {cta_color};
    background: {cta_bg};
    border-radius: var(--product-card-button-radius, 4px);
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
}}
.product-card__cta--busy {{
    cursor: progress;
}}
.product-card__spinner {{
    width: 20px;
    height: 20px;
    border: 2px solid currentColor;
    border-right-color: transparent;
    border-radius: 50%;
    animation: product-card-spin 0.8s linear infinite;
}}
@keyframes product-card-spin {{
    to {{
        transform: rotate(360deg);
    }}
}}
.visually-hidden {{
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0 0 0 0);
    white-space: nowrap;
}}
@media screen and (min-width: {breakpoint}px) {{
    .product-card {{
        flex-direction: {direction};
        align-items: center;
    }}
    .product-card__content {{
        width: {content_pct}%;
    }}
    .product-card__media {{
        width: {media_pct}%;
    }}
}}
"#,
        badge_color = css_value(&state.badge_text_color),
        badge_bg = css_value(&state.badge_bg_color),
        cta_color = css_value(&state.cta_text_color),
        cta_bg = css_value(&state.cta_bg_color),
        breakpoint = WIDE_BREAKPOINT_PX,
        direction = state.orientation.flex_direction(),
        content_pct = CONTENT_WIDTH_PCT,
        media_pct = MEDIA_WIDTH_PCT,
    );

    if state.show_error {
        css.push_str(ERROR_RULES);
    }
    css
}

const ERROR_RULES: &str = r#".product-card__error {
    margin: 0;
    padding: 12px 16px;
    font-size: 14px;
    color: var(--product-card-error-color, #b42318);
    background: #fef3f2;
    border-radius: 4px;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::state::Orientation;

    #[test]
    fn css_value_strips_declaration_breakers() {
        assert_eq!(css_value("#ff0000"), "#ff0000");
        assert_eq!(css_value("rgb(0, 0, 0)"), "rgb(0, 0, 0)");
        assert_eq!(css_value("red;} body { display: none"), "red body  display: none");
        assert_eq!(css_value("</style>"), "/style");
    }

    #[test]
    fn colors_and_direction_flow_into_rules() {
        let mut state = ComponentState::default();
        state.cta_bg_color = "#0055ff".into();
        state.orientation = Orientation::ImageRight;
        let css = stylesheet(&state);
        assert!(css.contains("background: #0055ff;"));
        assert!(css.contains("flex-direction: row;"));
        assert!(css.contains("@media screen and (min-width: 750px)"));
        assert!(css.contains("width: 45%;"));
        assert!(css.contains("width: 55%;"));
    }

    #[test]
    fn error_rules_only_while_showing_error() {
        let mut state = ComponentState::default();
        assert!(!stylesheet(&state).contains(".product-card__error"));
        state.show_error = true;
        assert!(stylesheet(&state).contains(".product-card__error"));
    }

    #[test]
    fn hover_image_revealed_on_hover() {
        let css = stylesheet(&ComponentState::default());
        assert!(css.contains(r#"::slotted([slot="hover-image"]) {"#));
        assert!(css.contains(r#".product-card__media:hover ::slotted([slot="hover-image"]) {"#));
    }

    #[test]
    fn extension_points_are_referenced() {
        let mut state = ComponentState::default();
        state.show_error = true;
        let css = stylesheet(&state);
        for property in CUSTOM_PROPERTIES {
            assert!(css.contains(&format!("var({property}")), "{property} unused");
        }
    }
}
