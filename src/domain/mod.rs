// Domain layer - Typed models and boundary validation
pub mod plate;
pub mod stellar_object;
