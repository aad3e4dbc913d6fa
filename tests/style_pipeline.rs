//! End-to-end tests for the deterministic extraction pipeline.
//!
//! Drives the full scan → synthesize → validate → repair flow over
//! realistic page content and checks the engine's two guarantees:
//! closure over the extracted sets and WCAG AA readability.

use pdf_prism::{
    default_font_system, default_theme, ColorRole, FontRole, PageContent, StyleEngine, TextRun,
};

/// Route engine warnings through the test writer; repeated calls are
/// no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A small report-like document: dark body text, white page, one brand
/// blue, headings in a bold sans over a serif body.
fn report_pages() -> Vec<PageContent> {
    vec![
        PageContent::new(1, "1 1 1 rg 0 0 0 rg 0.2 0.4 0.8 rg")
            .with_run(TextRun::new("Helvetica-Bold", 24.0, "Quarterly Report"))
            .with_run(TextRun::new("Georgia", 11.0, "Revenue grew by")),
        PageContent::new(2, "0 0 0 rg #3366cc")
            .with_run(TextRun::new("Georgia", 11.0, "in the second quarter"))
            .with_run(TextRun::new("Courier", 9.0, "table_3.csv")),
        PageContent::new(3, "rgb(51, 102, 204) 0 0 0 1 k")
            .with_run(TextRun::new("Georgia", 11.0, "Outlook remains")),
    ]
}

#[test]
fn test_triad_document_assigns_core_roles() {
    let report = StyleEngine::new().extract(&report_pages());

    assert_eq!(report.theme.text.as_str(), "#000000");
    assert_eq!(report.theme.background.as_str(), "#ffffff");
    assert_eq!(report.theme.primary.as_str(), "#3366cc");
}

#[test]
fn test_equivalent_color_forms_collapse() {
    // `0.2 0.4 0.8 rg`, `#3366cc`, and `rgb(51,102,204)` are the same
    // color; the set must contain it once.
    let report = StyleEngine::new().extract(&report_pages());
    assert_eq!(report.colors.all().len(), 3);
}

#[test]
fn test_theme_closure_invariant() {
    let report = StyleEngine::new().extract(&report_pages());
    for role in ColorRole::ALL {
        // The contrast repair pass may move text off-palette; every
        // other role must be an extracted color.
        if role == ColorRole::Text {
            continue;
        }
        assert!(
            report.colors.contains(report.theme.get(role)),
            "{} escaped the extracted set",
            role.css_name()
        );
    }
    assert_eq!(report.theme.all_colors, report.colors.all());
}

#[test]
fn test_contrast_invariant() {
    let report = StyleEngine::new().extract(&report_pages());
    let ratio = color_science::contrast_ratio(
        report.theme.text.rgb(),
        report.theme.background.rgb(),
    );
    assert!(ratio >= 4.5, "text/background ratio {ratio}");
}

#[test]
fn test_contrast_invariant_on_hostile_palette() {
    init_tracing();
    // Only two similar light colors: strict closure alone cannot make
    // readable text, so the repair pass must step in.
    let pages = vec![PageContent::new(1, "#d8d8e0 #e0e0e8")];
    let report = StyleEngine::new().extract(&pages);
    let ratio = color_science::contrast_ratio(
        report.theme.text.rgb(),
        report.theme.background.rgb(),
    );
    assert!(ratio >= 4.5, "text/background ratio {ratio}");
}

#[test]
fn test_font_roles_from_size_and_usage() {
    let report = StyleEngine::new().extract(&report_pages());

    assert_eq!(report.fonts.heading, "Helvetica-Bold");
    assert_eq!(report.fonts.body, "Georgia");
    assert_eq!(report.fonts.mono, "Courier");
    assert_eq!(report.fonts.code, "Courier");
    assert_eq!(report.fonts.title, "Helvetica-Bold");
}

#[test]
fn test_font_closure_invariant() {
    let report = StyleEngine::new().extract(&report_pages());
    for role in FontRole::ALL {
        assert!(
            report.font_set.contains(report.fonts.get(role)),
            "{} escaped the extracted font set",
            role.css_name()
        );
    }
    assert_eq!(report.fonts.all_fonts, report.font_set.names());
}

#[test]
fn test_family_fallback_without_size_signal() {
    // No sizes: family characteristics decide — sans for heading,
    // serif for body.
    let pages = vec![PageContent::new(1, "#000000 #ffffff")
        .with_run(TextRun::new("Georgia", 0.0, "body"))
        .with_run(TextRun::new("Arial", 0.0, "heading"))];
    let report = StyleEngine::new().extract(&pages);
    assert_eq!(report.fonts.heading, "Arial");
    assert_eq!(report.fonts.body, "Georgia");
}

#[test]
fn test_empty_document_emits_defaults() {
    let pages = vec![PageContent::new(1, "BT /F1 12 Tf (no style here) Tj ET")];
    let report = StyleEngine::new().extract(&pages);

    assert_eq!(&report.theme, default_theme());
    assert_eq!(&report.fonts, default_font_system());
}

#[test]
fn test_empty_document_css_uses_default_constants() {
    let report = StyleEngine::new().extract(&[]);
    assert!(report.css.contains("--pdf-primary-color: #3366cc !important;"));
    assert!(report.css.contains("--pdf-background-color: #ffffff !important;"));
    assert!(report.css.contains("--pdf-text-color: #000000 !important;"));
    assert!(report.css.contains("--pdf-heading-font: sans-serif !important;"));
}

#[test]
fn test_css_mirrors_report_values() {
    let report = StyleEngine::new().extract(&report_pages());
    assert!(report.css.starts_with(":root {"));
    for role in ColorRole::ALL {
        assert!(report.css.contains(&format!(
            "--pdf-{}-color: {} !important;",
            role.css_name(),
            report.theme.get(role)
        )));
    }
    assert!(report
        .css
        .contains("--pdf-heading-font: \"Helvetica-Bold\" !important;"));
}

#[test]
fn test_extraction_is_deterministic() {
    let engine = StyleEngine::new();
    let a = engine.extract(&report_pages());
    let b = engine.extract(&report_pages());
    assert_eq!(a.theme, b.theme);
    assert_eq!(a.fonts, b.fonts);
    assert_eq!(a.css, b.css);
}

#[test]
fn test_theme_json_shape() {
    let report = StyleEngine::new().extract(&report_pages());
    let json = serde_json::to_value(&report.theme).unwrap();

    assert_eq!(json["primary"], "#3366cc");
    assert!(json.get("textSecondary").is_some());
    assert!(json.get("allColors").is_some());
    assert!(json.get("description").is_some());

    let fonts = serde_json::to_value(&report.fonts).unwrap();
    assert_eq!(fonts["heading"], "Helvetica-Bold");
    assert!(fonts.get("allFonts").is_some());
}

#[test]
fn test_malformed_tokens_are_skipped() {
    let pages = vec![PageContent::new(
        1,
        "rgb(999, 0, 0) 1.7 0.2 0.3 rg #abcd #3366cc",
    )];
    let report = StyleEngine::new().extract(&pages);
    let all: Vec<_> = report.colors.all().iter().map(|c| c.as_str()).collect();
    assert_eq!(all, vec!["#3366cc"]);
}
