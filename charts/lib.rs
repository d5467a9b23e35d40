/*!
This crate is the interop layer between the app's wasm page clients and the Chart.js runtime loaded on the page: a binding to the `Chart` constructor and a serde model of the configuration object it accepts.
*/

pub mod chartjs;
pub mod config;
pub mod pie_chart;
