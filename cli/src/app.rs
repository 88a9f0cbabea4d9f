use crate::cli::{Cli, Command, CustomColorArgs};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::host::{ConsoleNotifier, JsonFileSettings, LinePrompter, run_panel_bridge};
use engine::commands::{CommandId, prompt_custom_color};
use engine::host::{ColorSpaceContext, FixedWorkspace, Prompter};
use engine::model::ColorScheme;
use engine::model::validation::ColorSchemeValidator;
use engine::{ColorManager, ColorSpaceError, Extension, Validator};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::BufReader;

/// Resolve `--workspace` (or the current directory) to an existing folder.
pub async fn resolve_workspace(workspace: Option<&Path>) -> AppResult<PathBuf> {
    let path = match workspace {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let resolved = tokio::fs::canonicalize(&path)
        .await
        .map_err(|source| AppError::Workspace {
            path: path.clone(),
            source,
        })?;
    if !resolved.is_dir() {
        return Err(AppError::Workspace {
            path,
            source: std::io::Error::other("not a directory"),
        });
    }
    Ok(resolved)
}

/// Host capabilities for a workspace folder whose editor settings live in
/// `settings_file`.
pub fn workspace_context(workspace: &Path, settings_file: PathBuf) -> ColorSpaceContext {
    ColorSpaceContext::new(
        Arc::new(FixedWorkspace::new(workspace)),
        Arc::new(JsonFileSettings::new(settings_file)),
    )
}

/// One command line invocation against one workspace.
pub struct App {
    extension: Extension,
}

impl App {
    pub fn new(context: ColorSpaceContext) -> Self {
        Self {
            extension: Extension::new(context),
        }
    }

    pub fn extension(&self) -> &Extension {
        &self.extension
    }

    fn manager(&self) -> &ColorManager {
        self.extension.manager()
    }

    /// Run one subcommand, prompting through `prompter`.
    pub async fn run(&self, command: &Command, prompter: &dyn Prompter) -> AppResult<()> {
        match command {
            Command::Activate => self.extension.activate().await?,
            Command::ChangeColor => {
                self.extension
                    .execute(CommandId::ChangeColor, prompter)
                    .await?
            }
            Command::ResetColor => self.extension.execute(CommandId::ResetColor, prompter).await?,
            Command::RandomColor => {
                self.extension
                    .execute(CommandId::RandomColor, prompter)
                    .await?
            }
            Command::AddCustomColor(args) => self.add_custom_color(args, prompter).await?,
            Command::Current => print!("{}", self.describe_current().await),
            Command::List => print!("{}", self.describe_colors().await),
            Command::UpdateCustomColor { index, changes } => {
                self.update_custom_color(*index, changes).await?
            }
            Command::DeleteCustomColor { index } => self.delete_custom_color(*index).await?,
            Command::Panel => self.serve_panel().await?,
        }
        Ok(())
    }

    /// Activate, then serve the panel protocol on stdin/stdout.
    pub async fn serve_panel(&self) -> AppResult<()> {
        self.extension.activate().await?;
        let handled = run_panel_bridge(
            self.extension.panel(),
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        )
        .await?;
        log::info!("Panel session ended after {handled} requests");
        Ok(())
    }

    pub async fn add_custom_color(
        &self,
        args: &CustomColorArgs,
        prompter: &dyn Prompter,
    ) -> AppResult<()> {
        let scheme = if args.is_empty() {
            match prompt_custom_color(prompter).await {
                Some(scheme) => scheme,
                None => {
                    log::debug!("Custom color prompt dismissed");
                    return Ok(());
                }
            }
        } else {
            args.to_scheme().ok_or_else(|| {
                AppError::InvalidInput(
                    "--name, --activity-bar and --side-bar must be given together".to_string(),
                )
            })?
        };

        validate_scheme(&scheme)?;
        Ok(self.manager().add_custom_color(&scheme).await?)
    }

    pub async fn update_custom_color(
        &self,
        index: usize,
        changes: &CustomColorArgs,
    ) -> AppResult<()> {
        if changes.is_empty() {
            return Err(AppError::InvalidInput(
                "Nothing to update: pass --name, --activity-bar or --side-bar".to_string(),
            ));
        }

        let custom = self.manager().get_all_colors().await.custom;
        let existing = custom
            .get(index)
            .cloned()
            .ok_or(ColorSpaceError::InvalidIndex {
                index,
                len: custom.len(),
            })?;

        let updated = changes.apply_to(existing);
        validate_scheme(&updated)?;
        Ok(self.manager().update_custom_color(index, &updated).await?)
    }

    /// Unlike the panel, an index outside the list is an error here.
    pub async fn delete_custom_color(&self, index: usize) -> AppResult<()> {
        let len = self.manager().get_all_colors().await.custom.len();
        if index >= len {
            return Err(ColorSpaceError::InvalidIndex { index, len }.into());
        }
        Ok(self.manager().delete_custom_color(index).await?)
    }

    pub async fn describe_current(&self) -> String {
        match self.manager().get_workspace_color().await {
            Some(scheme) => format!(
                "{}\n  activity bar  {}\n  side bar      {}\n",
                scheme.name, scheme.activity_bar.background, scheme.side_bar.background
            ),
            None => "No color assigned to this workspace\n".to_string(),
        }
    }

    /// Fixed then custom colors; `*` marks the current one and custom
    /// colors carry the index the update and delete subcommands take.
    pub async fn describe_colors(&self) -> String {
        let colors = self.manager().get_all_colors().await;
        let current = self.manager().get_workspace_color().await;
        let marker = |scheme: &ColorScheme| {
            if current.as_ref() == Some(scheme) {
                '*'
            } else {
                ' '
            }
        };

        let mut text = String::from("Fixed colors:\n");
        for scheme in &colors.fixed {
            let _ = writeln!(text, "  {} {}", marker(scheme), summary(scheme));
        }

        text.push_str("Custom colors:\n");
        if colors.custom.is_empty() {
            text.push_str("    (none)\n");
        }
        for (index, scheme) in colors.custom.iter().enumerate() {
            let _ = writeln!(text, "  {} [{index}] {}", marker(scheme), summary(scheme));
        }
        text
    }
}

fn summary(scheme: &ColorScheme) -> String {
    format!(
        "{:<16} {} / {}",
        scheme.name, scheme.activity_bar.background, scheme.side_bar.background
    )
}

fn validate_scheme(scheme: &ColorScheme) -> AppResult<()> {
    ColorSchemeValidator::strict()
        .validate(scheme)
        .map_err(|e| AppError::Engine(e.into()))
}

/// Entry point behind `main`: one subcommand against one workspace.
pub async fn run(cli: Cli, config: &AppConfig) -> AppResult<()> {
    let workspace = resolve_workspace(cli.workspace.as_deref()).await?;
    let settings_file = config.settings_file(&workspace);
    log::debug!(
        "Workspace {} with settings {}",
        workspace.display(),
        settings_file.display()
    );

    let context = workspace_context(&workspace, settings_file);
    // In panel mode stdout carries the protocol, so notifications only go to the log
    let context = if cli.command == Command::Panel {
        context
    } else {
        context.with_notifier(Arc::new(ConsoleNotifier))
    };

    App::new(context)
        .run(&cli.command, &LinePrompter::stdio())
        .await
}
