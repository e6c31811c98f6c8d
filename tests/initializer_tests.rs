use approx::assert_relative_eq;
use chart_canvas::ChartError;
use chart_canvas::api::{
    CanvasConfig, ChartCanvasInitializer, DATASET_DIAGNOSTIC_LABEL, MemorySink, WidthPolicy,
};
use chart_canvas::core::Dataset;
use chart_canvas::dom::{Document, NodeId};
use serde_json::json;

fn page_with_container(width: Option<&str>) -> (Document, NodeId) {
    let mut document = Document::new();
    let root = document.root();
    let container = document.create_element(root, "div").expect("container");
    document.add_class(container, "main").expect("class");
    if let Some(width) = width {
        document
            .set_style(container, "width", width)
            .expect("width style");
    }
    (document, container)
}

fn initializer() -> ChartCanvasInitializer {
    ChartCanvasInitializer::new(CanvasConfig::default()).expect("initializer")
}

#[test]
fn surface_for_500px_container() {
    let (mut document, container) = page_with_container(Some("500px"));
    let mut sink = MemorySink::default();
    let canvas = initializer()
        .initialize(&mut document, &Dataset::empty(), &mut sink)
        .expect("initialize");

    let svg = canvas.surface.svg();
    let group = canvas.surface.group();
    assert_eq!(document.children(container), &[svg]);
    assert_eq!(document.children(svg), &[group]);
    assert_eq!(document.tag(svg), Some("svg"));
    assert_eq!(document.tag(group), Some("g"));

    assert_eq!(document.attr(svg, "width"), Some("459"));
    assert_eq!(document.attr(svg, "height"), Some("260"));
    assert_eq!(document.attr(svg, "class"), Some("line_chart"));
    assert_eq!(document.attr(group, "class"), Some("container"));
    assert_eq!(document.attr(group, "transform"), Some("translate(4.5,30)"));

    assert_relative_eq!(canvas.surface.size().width, 459.0, epsilon = 1e-9);
    assert_eq!(canvas.surface.size().height, 260.0);
}

#[test]
fn scales_have_unset_domains_and_content_ranges() {
    let (mut document, _) = page_with_container(Some("480px"));
    let canvas = initializer()
        .initialize(&mut document, &Dataset::empty(), &mut MemorySink::default())
        .expect("initialize");

    assert_relative_eq!(canvas.layout.width, 432.0, epsilon = 1e-9);
    assert_eq!(canvas.scales.x.range(), (0.0, canvas.layout.width));
    assert_eq!(canvas.scales.y.range(), (200.0, 0.0));
    assert_eq!(canvas.scales.x.domain(), (0.0, 1.0));
    assert_eq!(canvas.scales.y.domain(), (0.0, 1.0));
}

#[test]
fn dataset_reaches_diagnostics_unmodified() {
    let raw = json!([
        {"DATE": 946684800000u64, "MORTGAGE30US": 7.5},
        {"DATE": 947289600000u64, "MORTGAGE30US": null}
    ]);
    let dataset = Dataset::from_value(raw.clone()).expect("dataset");
    let (mut document, _) = page_with_container(Some("480px"));
    let mut sink = MemorySink::default();

    initializer()
        .initialize(&mut document, &dataset, &mut sink)
        .expect("initialize");

    assert_eq!(sink.entries.len(), 1);
    assert_eq!(sink.entries[0].0, DATASET_DIAGNOSTIC_LABEL);
    assert_eq!(sink.last(), Some(&raw));
}

#[test]
fn rerun_appends_independent_surface() {
    let (mut document, container) = page_with_container(Some("500px"));
    let init = initializer();
    let first = init
        .initialize(&mut document, &Dataset::empty(), &mut MemorySink::default())
        .expect("first");
    let second = init
        .initialize(&mut document, &Dataset::empty(), &mut MemorySink::default())
        .expect("second");

    assert_ne!(first.surface.svg(), second.surface.svg());
    assert_eq!(
        document.children(container),
        &[first.surface.svg(), second.surface.svg()]
    );
    assert_eq!(document.children(second.surface.svg()).len(), 1);
}

#[test]
fn missing_container_fails_fast() {
    let mut document = Document::new();
    let err = initializer()
        .initialize(&mut document, &Dataset::empty(), &mut MemorySink::default())
        .expect_err("no container");
    assert!(matches!(err, ChartError::ContainerNotFound { ref selector } if selector == ".main"));
}

#[test]
fn unparseable_width_fails_without_touching_document() {
    for width in [Some("auto"), Some("50%")] {
        let (mut document, _) = page_with_container(width);
        let before = document.clone();
        let mut sink = MemorySink::default();

        let err = initializer()
            .initialize(&mut document, &Dataset::empty(), &mut sink)
            .expect_err("unparseable width");
        assert!(
            matches!(err, ChartError::UnparseableWidth { .. }),
            "{width:?}: {err}"
        );
        assert_eq!(document, before);
        assert!(sink.entries.is_empty());
    }
}

#[test]
fn zero_width_container_fails_fast() {
    let (mut document, _) = page_with_container(Some("0px"));
    let err = initializer()
        .initialize(&mut document, &Dataset::empty(), &mut MemorySink::default())
        .expect_err("zero width");
    assert!(matches!(err, ChartError::InvalidWidth { .. }));
}

#[test]
fn fallback_policy_uses_configured_width() {
    let config =
        CanvasConfig::default().with_width_policy(WidthPolicy::Fallback { width_px: 500.0 });
    let init = ChartCanvasInitializer::new(config).expect("initializer");
    let (mut document, _) = page_with_container(Some("auto"));

    let canvas = init
        .initialize(&mut document, &Dataset::empty(), &mut MemorySink::default())
        .expect("fallback");
    assert_eq!(document.attr(canvas.surface.svg(), "width"), Some("459"));
    assert_eq!(document.attr(canvas.surface.svg(), "height"), Some("260"));
}

#[test]
fn fallback_policy_still_requires_container() {
    let config =
        CanvasConfig::default().with_width_policy(WidthPolicy::Fallback { width_px: 500.0 });
    let init = ChartCanvasInitializer::new(config).expect("initializer");
    let mut document = Document::new();
    assert!(matches!(
        init.initialize(&mut document, &Dataset::empty(), &mut MemorySink::default()),
        Err(ChartError::ContainerNotFound { .. })
    ));
}

#[test]
fn first_matching_container_is_used() {
    let (mut document, first) = page_with_container(Some("500px"));
    let root = document.root();
    let second = document.create_element(root, "div").expect("second");
    document.add_class(second, "main").expect("class");
    document.set_style(second, "width", "900px").expect("width");

    let canvas = initializer()
        .initialize_with_tracing(&mut document, &Dataset::empty())
        .expect("initialize");
    assert_eq!(document.parent(canvas.surface.svg()), Some(first));
    assert!(document.children(second).is_empty());
}

#[test]
fn chart_elements_go_inside_the_group() {
    let (mut document, _) = page_with_container(Some("500px"));
    let canvas = initializer()
        .initialize(&mut document, &Dataset::empty(), &mut MemorySink::default())
        .expect("initialize");

    let path = canvas.surface.append(&mut document, "path").expect("path");
    assert_eq!(document.parent(path), Some(canvas.surface.group()));
    assert_eq!(
        canvas.surface.markup(&document),
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="459" height="260" class="line_chart"><g class="container" transform="translate(4.5,30)"><path/></g></svg>"#
    );
}

#[test]
fn custom_selector_and_classes() {
    let config = CanvasConfig::default()
        .with_container_selector("#rates")
        .with_classes(chart_canvas::render::SurfaceClasses {
            svg: "rate_chart".to_owned(),
            group: "plot".to_owned(),
        });
    let init = ChartCanvasInitializer::new(config).expect("initializer");

    let mut document = Document::new();
    let root = document.root();
    let container = document.create_element(root, "div").expect("div");
    document.set_attr(container, "id", "rates").expect("id");
    document.set_style(container, "width", "1000px").expect("width");

    let canvas = init
        .initialize(&mut document, &Dataset::empty(), &mut MemorySink::default())
        .expect("initialize");
    assert_eq!(document.attr(canvas.surface.svg(), "class"), Some("rate_chart"));
    assert_eq!(document.attr(canvas.surface.group(), "class"), Some("plot"));
    assert_eq!(document.attr(canvas.surface.svg(), "width"), Some("918"));
    assert_eq!(
        document.attr(canvas.surface.group(), "transform"),
        Some("translate(9,30)")
    );
}

#[test]
fn unset_width_is_reported_with_selector() {
    let (mut document, _) = page_with_container(None);
    let before = document.clone();
    let err = initializer()
        .initialize(&mut document, &Dataset::empty(), &mut MemorySink::default())
        .expect_err("unset width");
    assert!(matches!(err, ChartError::WidthUnset { ref selector } if selector == ".main"));
    assert_eq!(err.to_string(), "container `.main` has no computed width");
    assert_eq!(document, before);
}

#[test]
fn non_finite_surface_size_fails_fast() {
    let config = CanvasConfig::default().with_layout(chart_canvas::core::LayoutTuning {
        width_factor: 1.0,
        ..chart_canvas::core::LayoutTuning::default()
    });
    let init = ChartCanvasInitializer::new(config).expect("initializer");
    let (mut document, container) = page_with_container(Some("1.79e308px"));
    let mut sink = MemorySink::default();

    let err = init
        .initialize(&mut document, &Dataset::empty(), &mut sink)
        .expect_err("infinite surface width");
    assert!(matches!(err, ChartError::InvalidLayout { .. }));
    assert!(document.children(container).is_empty());
    assert!(sink.entries.is_empty());
}

#[test]
fn tiny_margin_is_written_exactly() {
    let (mut document, _) = page_with_container(Some("0.0000001px"));
    let canvas = initializer()
        .initialize(&mut document, &Dataset::empty(), &mut MemorySink::default())
        .expect("initialize");

    let (left, top) = canvas.surface.origin();
    assert_eq!(top, 30.0);
    let transform = document
        .attr(canvas.surface.group(), "transform")
        .expect("transform");
    let inner = transform
        .strip_prefix("translate(")
        .and_then(|rest| rest.strip_suffix(",30)"))
        .expect("translate(x,30)");
    assert_ne!(inner, "0");
    assert_eq!(inner.parse::<f64>().expect("numeric x"), left);
}
