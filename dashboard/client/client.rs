use showroom_charts::chartjs::Chart;
use showroom_charts::config::{GRAY, GRAY_TRANSPARENT, GREEN, GREEN_TRANSPARENT};
use showroom_charts::pie_chart::{
	ChartKind, LegendOptions, LegendPosition, PieChartConfig, PieChartData, PieChartDataset,
	PieChartOptions, PluginOptions, TitleOptions,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();
	boot_status_pie_chart();
}

/// Draw the available/sold pie chart into the `status_pie_chart` container. Pages without the container are left untouched.
pub fn boot_status_pie_chart() {
	let window = web_sys::window().unwrap();
	let document = window.document().unwrap();
	let container = match document.get_element_by_id("status_pie_chart") {
		Some(container) => container,
		None => return,
	};
	let container = container.dyn_into::<web_sys::HtmlElement>().unwrap();
	let available = count_from_attr(container.dataset().get("available"));
	let sold = count_from_attr(container.dataset().get("sold"));
	let config = status_pie_chart_config(available, sold);
	let config = JsValue::from_serde(&config).unwrap();
	Chart::new(&container, &config);
}

fn status_pie_chart_config(available: i64, sold: i64) -> PieChartConfig {
	PieChartConfig {
		kind: ChartKind::Pie,
		data: PieChartData {
			labels: vec!["Available".to_owned(), "Sold".to_owned()],
			datasets: vec![PieChartDataset {
				data: vec![available, sold],
				background_color: vec![GREEN_TRANSPARENT.to_owned(), GRAY_TRANSPARENT.to_owned()],
				border_color: vec![GREEN.to_owned(), GRAY.to_owned()],
				border_width: 2,
			}],
		},
		options: PieChartOptions {
			responsive: true,
			plugins: PluginOptions {
				legend: LegendOptions {
					position: LegendPosition::Bottom,
				},
				title: TitleOptions { display: false },
			},
		},
	}
}

/// Parse a count from a data attribute. Missing or non-numeric values count as zero.
fn count_from_attr(value: Option<String>) -> i64 {
	value
		.and_then(|value| value.trim().parse().ok())
		.unwrap_or(0)
}

#[test]
fn test_count_from_attr() {
	assert_eq!(count_from_attr(Some("12".to_owned())), 12);
	assert_eq!(count_from_attr(Some(" 8 ".to_owned())), 8);
	assert_eq!(count_from_attr(Some("007".to_owned())), 7);
	assert_eq!(count_from_attr(Some("abc".to_owned())), 0);
	assert_eq!(count_from_attr(Some("12.5".to_owned())), 0);
	assert_eq!(count_from_attr(Some("".to_owned())), 0);
	assert_eq!(count_from_attr(None), 0);
	// Negative values pass through unchanged.
	assert_eq!(count_from_attr(Some("-5".to_owned())), -5);
}

#[test]
fn test_status_pie_chart_config() {
	let config = status_pie_chart_config(12, 5);
	assert_eq!(config.data.labels, vec!["Available", "Sold"]);
	assert_eq!(config.data.datasets.len(), 1);
	assert_eq!(config.data.datasets[0].data, vec![12, 5]);
	assert_eq!(config.data.datasets[0].border_width, 2);
	assert_eq!(
		config.options.plugins.legend.position,
		LegendPosition::Bottom
	);
	assert!(!config.options.plugins.title.display);
	assert!(config.options.responsive);
	let config = status_pie_chart_config(0, 3);
	assert_eq!(config.data.labels, vec!["Available", "Sold"]);
	assert_eq!(config.data.datasets[0].data, vec![0, 3]);
	let config = status_pie_chart_config(0, 0);
	assert_eq!(config.data.datasets[0].data, vec![0, 0]);
}
