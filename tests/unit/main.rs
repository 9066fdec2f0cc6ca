//! Unit tests, one file per source file, mirroring the `src/` layout

mod io;
mod model;
