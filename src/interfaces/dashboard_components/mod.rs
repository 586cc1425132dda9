pub mod chart_panel;
pub mod scenario_sidebar;
