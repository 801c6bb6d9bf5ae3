//! Input handlers, implemented as `impl App` blocks

mod keyboard;
mod mouse;
