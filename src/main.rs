use std::path::PathBuf;

use clap::{Parser, Subcommand};
use steam_property_estimator::{app, config, form::FormKind, i18n, logging};

/// 증기 물성 근사 계산 CLI
#[derive(Parser, Debug)]
#[command(name = "steam_property_estimator_cli")]
#[command(about = "Approximate steam property estimator", long_about = None)]
struct Args {
    /// Language (auto, en, ko)
    #[arg(short = 'L', long, global = true)]
    lang: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a temperature or pressure value (kPa-based table)
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// Saturated steam properties from a temperature
    Temperature {
        #[arg(allow_hyphen_values = true)]
        value: String,
        unit: String,
    },
    /// Saturated steam properties from a pressure
    Pressure {
        #[arg(allow_hyphen_values = true)]
        value: String,
        unit: String,
    },
    /// Superheated steam properties from a temperature and a pressure
    Superheated {
        #[arg(allow_hyphen_values = true)]
        temperature: String,
        temp_unit: String,
        #[arg(allow_hyphen_values = true)]
        pressure: String,
        pressure_unit: String,
    },
    /// Menu-driven session (default)
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    logging::init("warn");
    if let Err(err) = try_run(Args::parse()) {
        eprintln!("Error: {err}");
    }
}

fn try_run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_from(&args.config)?;
    let lang = i18n::resolve_language(args.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);

    match args.command.unwrap_or(Command::Interactive) {
        Command::Convert { value, from, to } => {
            let result = app::convert_once(value, &from, &to)?;
            println!("{result} {to}");
        }
        Command::Temperature { value, unit } => {
            let values = [value.as_str(), unit.as_str()];
            app::submit_once(FormKind::SaturationByTemperature, &values, &tr);
        }
        Command::Pressure { value, unit } => {
            let values = [value.as_str(), unit.as_str()];
            app::submit_once(FormKind::SaturationByPressure, &values, &tr);
        }
        Command::Superheated {
            temperature,
            temp_unit,
            pressure,
            pressure_unit,
        } => {
            app::submit_once(
                FormKind::Superheated,
                &[
                    temperature.as_str(),
                    temp_unit.as_str(),
                    pressure.as_str(),
                    pressure_unit.as_str(),
                ],
                &tr,
            );
        }
        Command::Interactive => app::run(&cfg, &tr)?,
    }
    Ok(())
}
