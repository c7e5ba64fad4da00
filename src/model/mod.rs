// MODEL: shared camera/orientation state mutated by the controller
pub mod view_state;

pub use view_state::ViewState;
