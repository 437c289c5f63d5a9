pub mod modal_state;
