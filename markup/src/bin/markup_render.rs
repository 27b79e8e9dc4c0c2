// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Read, Write};

use clap::Parser;
use miette::IntoDiagnostic;
use r3bl_markup::{MarkupString, cli::{CLIArg, OutputMode}, global_color_support,
                  try_initialize_logging_global};

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();
    try_initialize_logging_global(cli_arg.to_tracing_config())?;

    let input = if cli_arg.text.is_empty() {
        let mut acc = String::new();
        std::io::stdin().read_to_string(&mut acc).into_diagnostic()?;
        acc
    } else {
        cli_arg.text.join(" ")
    };
    tracing::debug!(message = "read input", len = input.len());

    let text = MarkupString::with_config(&input, cli_arg.to_markup_config());
    let output = match cli_arg.to_output_mode(global_color_support::detect()) {
        OutputMode::Clean => text.clean().to_string(),
        OutputMode::Raw => text.raw().to_string(),
        OutputMode::Render(options) => text.render(&options),
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").into_diagnostic()?;
    stdout.flush().into_diagnostic()?;
    Ok(())
}
