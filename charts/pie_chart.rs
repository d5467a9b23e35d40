/*!
The pie chart configuration object accepted by the Chart.js constructor. Field and variant names serialize to the names Chart.js expects on the wire, so a config can be handed to [`Chart::new`](crate::chartjs::Chart) via `JsValue::from_serde` unchanged.
*/

#[derive(serde::Deserialize, serde::Serialize, Clone)]
pub struct PieChartConfig {
	#[serde(rename = "type")]
	pub kind: ChartKind,
	pub data: PieChartData,
	pub options: PieChartOptions,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
	Pie,
}

#[derive(serde::Deserialize, serde::Serialize, Clone)]
pub struct PieChartData {
	pub labels: Vec<String>,
	pub datasets: Vec<PieChartDataset>,
}

/// One ring of slices. Colors are per-slice and positional, parallel to `data`.
#[derive(serde::Deserialize, serde::Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PieChartDataset {
	pub data: Vec<i64>,
	pub background_color: Vec<String>,
	pub border_color: Vec<String>,
	pub border_width: u32,
}

#[derive(serde::Deserialize, serde::Serialize, Clone)]
pub struct PieChartOptions {
	pub responsive: bool,
	pub plugins: PluginOptions,
}

#[derive(serde::Deserialize, serde::Serialize, Clone)]
pub struct PluginOptions {
	pub legend: LegendOptions,
	pub title: TitleOptions,
}

#[derive(serde::Deserialize, serde::Serialize, Clone)]
pub struct LegendOptions {
	pub position: LegendPosition,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
	Top,
	Bottom,
	Left,
	Right,
}

#[derive(serde::Deserialize, serde::Serialize, Clone)]
pub struct TitleOptions {
	pub display: bool,
}

#[test]
fn test_pie_chart_config_wire_format() {
	let config = PieChartConfig {
		kind: ChartKind::Pie,
		data: PieChartData {
			labels: vec!["Available".to_owned(), "Sold".to_owned()],
			datasets: vec![PieChartDataset {
				data: vec![12, 5],
				background_color: vec![
					crate::config::GREEN_TRANSPARENT.to_owned(),
					crate::config::GRAY_TRANSPARENT.to_owned(),
				],
				border_color: vec![
					crate::config::GREEN.to_owned(),
					crate::config::GRAY.to_owned(),
				],
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
	};
	let actual = serde_json::to_value(&config).unwrap();
	let expected = serde_json::json!({
		"type": "pie",
		"data": {
			"labels": ["Available", "Sold"],
			"datasets": [{
				"data": [12, 5],
				"backgroundColor": ["rgba(25, 135, 84, 0.7)", "rgba(108, 117, 125, 0.7)"],
				"borderColor": ["rgba(25, 135, 84, 1)", "rgba(108, 117, 125, 1)"],
				"borderWidth": 2,
			}],
		},
		"options": {
			"responsive": true,
			"plugins": {
				"legend": { "position": "bottom" },
				"title": { "display": false },
			},
		},
	});
	assert_eq!(actual, expected);
}
