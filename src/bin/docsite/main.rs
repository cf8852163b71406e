use std::io::Write;

use clap::Parser;

mod args;
mod check;
mod debug;
mod error;
mod init;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = args::Cli::parse();

    cli.color.write_global();
    let colored_stderr = !matches!(
        anstream::AutoStream::choice(&std::io::stderr()),
        anstream::ColorChoice::Never
    );
    init_logging(cli.verbose, colored_stderr);

    cli.command.run().map_err(|err| {
        proc_exit::Exit::new(proc_exit::Code::FAILURE).with_message(format!("{err:#}"))
    })?;

    Ok(())
}

fn init_logging(
    level: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
    colored: bool,
) {
    let Some(level) = level.log_level() else {
        return;
    };

    let palette = if colored {
        Palette::colored()
    } else {
        Palette::plain()
    };

    let mut builder = env_logger::Builder::new();
    builder.write_style(if colored {
        env_logger::WriteStyle::Always
    } else {
        env_logger::WriteStyle::Never
    });
    builder.filter(None, level.to_level_filter());
    builder.format(move |f, record| {
        let style = palette.style(record.level());
        match record.level() {
            log::Level::Info => writeln!(f, "{}", record.args()),
            log::Level::Warn => writeln!(f, "{style}warning{style:#}: {}", record.args()),
            log::Level::Error => writeln!(f, "{style}error{style:#}: {}", record.args()),
            log::Level::Debug => writeln!(f, "{style}debug{style:#}: {}", record.args()),
            log::Level::Trace => writeln!(
                f,
                "{style}trace{style:#} [{}]: {}",
                record.module_path().unwrap_or_default(),
                record.args()
            ),
        }
    });

    builder.init();
}

#[derive(Copy, Clone, Debug, Default)]
struct Palette {
    error: anstyle::Style,
    warn: anstyle::Style,
    debug: anstyle::Style,
    trace: anstyle::Style,
}

impl Palette {
    fn colored() -> Self {
        Self {
            error: anstyle::AnsiColor::Red.on_default() | anstyle::Effects::BOLD,
            warn: anstyle::AnsiColor::Yellow.on_default() | anstyle::Effects::BOLD,
            debug: anstyle::AnsiColor::Blue.on_default(),
            trace: anstyle::AnsiColor::Cyan.on_default() | anstyle::Effects::DIMMED,
        }
    }

    fn plain() -> Self {
        Self::default()
    }

    fn style(&self, level: log::Level) -> anstyle::Style {
        match level {
            log::Level::Error => self.error,
            log::Level::Warn => self.warn,
            log::Level::Info => anstyle::Style::new(),
            log::Level::Debug => self.debug,
            log::Level::Trace => self.trace,
        }
    }
}
