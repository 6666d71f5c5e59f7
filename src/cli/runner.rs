//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::DirectoryConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::{ControllerConfig, PaginationController, Update};
use crate::view::{self, Screen};
use std::sync::Arc;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Browse {
                max_pages,
                retries,
                no_splash,
            } => self.browse(*max_pages, *retries, *no_splash).await,
            Commands::Fetch { page } => self.fetch(*page).await,
            Commands::Config => self.show_config(),
        }
    }

    /// Load configuration and apply command-line overrides
    pub fn load_config(&self) -> Result<DirectoryConfig> {
        let mut config = match &self.cli.config {
            Some(path) => DirectoryConfig::from_file(path)?,
            None => DirectoryConfig::default(),
        };

        if let Some(ref base_url) = self.cli.base_url {
            config.api.base_url.clone_from(base_url);
        }
        if let Some(timeout_ms) = self.cli.timeout_ms {
            config.api.timeout_ms = timeout_ms;
        }

        config.validate()?;
        Ok(config)
    }

    fn build_client(config: &DirectoryConfig) -> Result<HttpClient> {
        HttpClient::with_config(HttpClientConfig::from_api(&config.api))
    }

    /// Fetch one page and print it
    async fn fetch(&self, page: u32) -> Result<()> {
        let config = self.load_config()?;
        let client = Self::build_client(&config)?;

        let result = client.fetch_page(page).await?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(())
    }

    /// Print the effective configuration
    fn show_config(&self) -> Result<()> {
        let config = self.load_config()?;
        print!("{}", config.to_yaml()?);
        Ok(())
    }

    /// Splash screen, then infinite scroll until the list ends
    ///
    /// A terminal always shows the end of what was printed, so the sentinel is
    /// reported visible once the list settles and stays visible until the page
    /// limit is requested.
    async fn browse(&self, max_pages: Option<u32>, retries: u32, no_splash: bool) -> Result<()> {
        let config = self.load_config()?;
        let client = Self::build_client(&config)?;

        if !no_splash {
            view::play_splash(&mut std::io::stdout(), config.ui.loading_screen_duration()).await?;
        }

        let mut controller =
            PaginationController::new(Arc::new(client), ControllerConfig::from_config(&config));
        let sentinel = controller.sentinel();
        let limit_reached = |page: u32| max_pages.is_some_and(|max| page >= max);

        let mut printed = 0usize;
        let mut retries_left = retries;
        let mut was_loading = false;

        controller.initialize();
        print!("{}", view::render(&controller.view(), &config.ui));

        while let Some(update) = controller.next_update().await {
            match update {
                Update::PageLoaded { .. } => {
                    let current = controller.view();
                    for user in current.items.iter().skip(printed) {
                        print!("{}", view::user_card(user));
                    }
                    printed = current.items.len();
                }
                Update::Settled => {
                    if !limit_reached(controller.state().current_page) {
                        sentinel.set_visible(true);
                    }
                }
                Update::FetchFailed { message, .. } => {
                    print!("{}", view::error_state(&message, false));
                    if retries_left == 0 {
                        return Err(Error::Other(message));
                    }
                    retries_left -= 1;
                    printed = 0;
                    info!("Retrying ({} retries left)", retries_left);
                    controller.retry();
                    print!("{}", view::render(&controller.view(), &config.ui));
                }
                Update::SentinelChanged { .. } | Update::Stale { .. } => {}
            }

            let current = controller.view();
            if current.is_loading && limit_reached(current.current_page) {
                sentinel.set_visible(false);
            }
            if current.is_loading && !was_loading && Screen::for_view(&current) == Screen::List {
                print!("{}", view::loading_skeleton(0, "Loading more users..."));
            }
            was_loading = current.is_loading;

            let done = current.initial_load_settled
                && !current.is_loading
                && current.error.is_none()
                && (!current.has_more || limit_reached(current.current_page));
            if done {
                print!("{}", view::footer(&current, &config.ui));
                info!("Browsed {} users", current.items.len());
                break;
            }
        }

        Ok(())
    }
}
