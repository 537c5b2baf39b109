//! `pagepush` entry point: load config, run the publish use case, render it

use anyhow::{Context, Result};
use pagepush::config::{Config, ConfigWarning};
use pagepush::infrastructure::JsonEventSink;
use pagepush::presentation::factory::{publish_options, should_confirm};
use pagepush::presentation::{create_publish_use_case, Cli};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::progress::ConsoleEventSink;
use crate::ui::prompt::confirm_for;
use crate::ui::views::publish::{render_publish_header, render_publish_result};

pub fn cmd_publish(cli: &Cli) -> Result<()> {
    let root = cli
        .working_dir()
        .context("failed to determine the working directory")?;
    if !root.is_dir() {
        anyhow::bail!("{} is not a directory", root.display());
    }

    let (config, warnings) = Config::load_or_default(Some(root.as_path()))?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    let options = publish_options(cli, &config, &root);
    let confirm = confirm_for(&ui, should_confirm(cli, &config));
    let use_case = create_publish_use_case(&config, &root, confirm);

    if ui.json {
        emit_config_warnings(&warnings);
        let sink = JsonEventSink::stdout();
        use_case.execute_with_events(&options, &sink)?;
        return Ok(());
    }

    print_config_warnings(&warnings, &ui);
    print!("{}", render_publish_header(&options, ui.color, ui.unicode));

    let sink = ConsoleEventSink::stdout(ui);
    let result = use_case.execute_with_events(&options, &sink)?;

    print!("{}", render_publish_result(&result, ui.color, ui.unicode));
    Ok(())
}

fn emit_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "config_warning",
            "key": w.key,
            "file": w.file.display().to_string(),
            "line": w.line,
            "suggestion": w.suggestion,
        }));
    }
}
