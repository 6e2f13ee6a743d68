//! Binary entry point: resolve paths, start logging, open the store, and run
//! the shell until the user quits.
use passbook::{fetch_credentials, logging, open_store, run_app, App, AppPaths, TerminalClipboard};
use tracing::error;

fn main() -> anyhow::Result<()> {
    let paths = AppPaths::resolve()?;
    logging::init(&paths)?;

    let conn = open_store(&paths.db_path)?;
    let records = fetch_credentials(&conn, None)?;

    let mut app = App::new(conn, records, Box::new(TerminalClipboard));
    let result = run_app(&mut app);
    if let Err(err) = &result {
        error!(error = ?err, "shell exited with an error");
    }

    app.shutdown()?;
    result
}
