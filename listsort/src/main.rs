mod application;
mod logging;
mod presentation;

use listsort_core::error::Result;

fn main() -> Result<()> {
    application::run()
}
