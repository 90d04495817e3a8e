//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each widget is a self-contained UI + state unit performing one
//! request/response interaction against the prediction/chat API. The chart
//! components are purely presentational.

pub mod chatbot_widget;
pub mod customer_chart;
pub mod maintenance_widget;
pub mod sales_chart;
pub mod sales_widget;
