//! End-to-end tests driving the public API the way a scoring shell does:
//! record holes on a card, settle, and render.

mod round;
mod properties;
