// Charge models and their rate table
pub mod charges;

// Crossing detection between sampled curves
pub mod intersection;

// Revenue grid
pub mod sampling;

// Sampled curves and hover annotations
pub mod series;

// Domain-specific error types
pub mod errors;
