// Copyright 2026 Mountutil Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{fmt as std_fmt, fs::create_dir_all, path::Path};

use anyhow::{Result, anyhow};
use tracing::{Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, FmtContext, FormatEvent, FormatFields, MakeWriter, format::DefaultFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// One line per event: `[LEVEL] [module] message`. Records bridged from the
/// library keep their module path as target, so syscall lines read as
/// `[DEBUG] [mountutil::mount::ops] unmount /mnt flags 0x2`.
struct PlainFormatter;

impl<S, N> FormatEvent<S, N> for PlainFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: fmt::format::Writer<'_>,
        event: &Event<'_>,
    ) -> std_fmt::Result {
        let meta = event.metadata();
        write!(writer, "[{}] [{}] ", meta.level(), meta.target())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn plain_layer<S, W>(writer: W) -> fmt::Layer<S, DefaultFields, PlainFormatter, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .event_format(PlainFormatter)
}

/// Installs the global subscriber. `log` records from the library are
/// forwarded into it. Keep the returned guard alive until exit or file output
/// is lost.
pub fn init_logging(verbose: bool, log_path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::new(if verbose { "debug" } else { "info" });

    let (file_layer, guard) = match log_path {
        Some(path) => {
            let directory = path
                .parent()
                .ok_or_else(|| anyhow!("Invalid log directory: {}", path.display()))?;
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log filename: {}", path.display()))?;
            create_dir_all(directory)?;

            let (non_blocking, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
            (Some(plain_layer(non_blocking)), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    tracing_log::LogTracer::init().ok();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn plain_layer_writes_level_target_message() {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::registry().with(plain_layer(move || writer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(target: "mountutil::mount::ops", "unmount /mnt flags 0x2");
            tracing::warn!("table changed");
        });

        let text = String::from_utf8(out.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "[DEBUG] [mountutil::mount::ops] unmount /mnt flags 0x2");
        assert!(lines[1].starts_with("[WARN] [mountutil::utils::log"));
        assert!(lines[1].ends_with("table changed"));
    }
}
