use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};

use crate::app::{InitParams, SimApp};
use crate::config::Config;
use crate::screens::ScreenId;
use crate::tui::snapshot::render_lines;
use crate::tui::Runtime;

use super::{connect, theme};

const LOAD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScreenArg {
    Home,
    Comp,
    Team,
    Player,
    Search,
}

#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Screen to render
    #[arg(value_enum)]
    pub screen: ScreenArg,

    /// Competition, team or player id
    pub id: Option<u32>,

    #[arg(long, default_value_t = 120)]
    pub width: u16,

    #[arg(long, default_value_t = 40)]
    pub height: u16,
}

impl SnapshotArgs {
    pub fn target(&self) -> Result<ScreenId> {
        let needs_id = |name: &str| match self.id {
            Some(id) => Ok(id),
            None => bail!("The {} screen needs an id", name),
        };
        Ok(match self.screen {
            ScreenArg::Home => ScreenId::Home,
            ScreenArg::Search => ScreenId::PlayerSearch,
            ScreenArg::Comp => ScreenId::Competition(needs_id("comp")?),
            ScreenArg::Team => ScreenId::Team(needs_id("team")?),
            ScreenArg::Player => ScreenId::Player(needs_id("player")?),
        })
    }
}

pub async fn snapshot_command(args: SnapshotArgs, config: &Config) -> Result<()> {
    let params = InitParams {
        skip_days: config.ui.skip_days,
        start: args.target()?,
        ..InitParams::new(connect(config)?)
    };
    let mut runtime: Runtime<SimApp> = Runtime::new(params, theme(config));

    let started = Instant::now();
    loop {
        runtime.poll_async()?;
        if !runtime.has_pending() {
            break;
        }
        if started.elapsed() > LOAD_TIMEOUT {
            bail!("Timed out waiting for the engine");
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    for line in render_lines(&mut runtime, args.width, args.height)? {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(screen: ScreenArg, id: Option<u32>) -> SnapshotArgs {
        SnapshotArgs { screen, id, width: 80, height: 24 }
    }

    #[test]
    fn test_targets() {
        assert_eq!(args(ScreenArg::Home, None).target().unwrap(), ScreenId::Home);
        assert_eq!(args(ScreenArg::Team, Some(3)).target().unwrap(), ScreenId::Team(3));
        assert!(args(ScreenArg::Player, None).target().is_err());
    }
}
