pub mod chart_view_model;
