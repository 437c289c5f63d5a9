pub mod models;

// Models shared between the GUI and anything else that reads the
// application configuration.
