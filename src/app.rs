use std::fs;

use crate::cli::{Cli, Commands};
use crate::core::{CategoryFilter, EntryStore, Query, count_by_category, derive};
use crate::error::AppError;
use crate::geometry::{LayoutOptions, preview_layout};
use crate::output::{
    Labels, PageOptions, TimelineTableOptions, output_categories_csv, output_categories_json,
    output_entry_json, output_layout_json, output_now_json, output_timeline_csv,
    output_timeline_json, print_categories_table, print_entry_detail, print_layout_table,
    print_now, print_timeline_table, render_page,
};
use crate::utils::filter_json;

pub(crate) struct CommandContext<'a> {
    pub(crate) store: &'a EntryStore,
    pub(crate) cli: &'a Cli,
    pub(crate) category: CategoryFilter,
    pub(crate) labels: Labels,
    pub(crate) current_year: i32,
}

impl CommandContext<'_> {
    fn query(&self) -> Query<'_> {
        Query {
            category: self.category,
            search: &self.cli.search,
        }
    }

    fn table_options(&self) -> TimelineTableOptions {
        TimelineTableOptions {
            use_color: self.cli.use_color(),
            compact: self.cli.compact,
            labels: self.labels,
        }
    }

    /// Print JSON output, optionally filtering through jq
    fn print_json(&self, json: &str) -> Result<(), AppError> {
        match self.cli.jq.as_deref() {
            Some(filter) => print!("{}", filter_json(json, filter, self.cli.use_color())?),
            None => println!("{json}"),
        }
        Ok(())
    }
}

fn handle_list(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let query = ctx.query();
    let timeline = derive(ctx.store.entries(), &query, ctx.current_year);

    if ctx.cli.wants_json() {
        let json = output_timeline_json(&timeline, ctx.category, query.search, &ctx.labels);
        return ctx.print_json(&json);
    }
    if ctx.cli.csv {
        print!("{}", output_timeline_csv(&timeline, &ctx.labels));
        return Ok(());
    }
    if timeline.is_empty() {
        println!("{}", ctx.labels.empty);
        return Ok(());
    }
    print_timeline_table(&timeline, ctx.table_options());
    Ok(())
}

fn handle_show(ctx: &CommandContext<'_>, id: &str) -> Result<(), AppError> {
    let entry = ctx
        .store
        .get(id)
        .ok_or_else(|| AppError::EntryNotFound { id: id.to_string() })?;

    if ctx.cli.wants_json() {
        return ctx.print_json(&output_entry_json(entry, &ctx.labels));
    }
    print_entry_detail(entry, &ctx.labels, ctx.cli.use_color());
    Ok(())
}

fn handle_categories(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let counts = count_by_category(ctx.store.entries(), &ctx.cli.search);
    if ctx.cli.wants_json() {
        return ctx.print_json(&output_categories_json(&counts));
    }
    if ctx.cli.csv {
        print!("{}", output_categories_csv(&counts));
        return Ok(());
    }
    print_categories_table(&counts, ctx.table_options());
    Ok(())
}

fn handle_now(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let timeline = derive(ctx.store.entries(), &ctx.query(), ctx.current_year);
    let ongoing: Vec<_> = timeline
        .items
        .iter()
        .copied()
        .filter(|e| e.is_ongoing())
        .collect();

    if ctx.cli.wants_json() {
        return ctx.print_json(&output_now_json(&ongoing, &ctx.labels));
    }
    print_now(&ongoing, &ctx.labels);
    Ok(())
}

fn handle_html(
    ctx: &CommandContext<'_>,
    output: Option<&std::path::Path>,
    title: &str,
) -> Result<(), AppError> {
    // The page filters client-side, so it always carries the whole store
    let all = derive(ctx.store.entries(), &Query::default(), ctx.current_year);
    let page = render_page(
        &all,
        &ctx.query(),
        PageOptions {
            title,
            labels: ctx.labels,
        },
    );

    match output {
        Some(path) => {
            fs::write(path, page).map_err(|source| AppError::WriteOutput {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{page}"),
    }
    Ok(())
}

fn handle_layout(ctx: &CommandContext<'_>, scroll: f64, viewport: f64) -> Result<(), AppError> {
    let timeline = derive(ctx.store.entries(), &ctx.query(), ctx.current_year);
    let preview = preview_layout(
        &timeline,
        LayoutOptions {
            scroll: scroll.max(0.0),
            viewport_height: viewport.max(0.0),
        },
    );

    if ctx.cli.wants_json() {
        return ctx.print_json(&output_layout_json(&preview));
    }
    print_layout_table(&preview, &ctx.labels, ctx.cli.use_color());
    Ok(())
}

/// Dispatch a parsed command
pub(crate) fn run_command(command: &Commands, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if ctx.cli.wants_json() && !command.supports_json() {
        log::warn!("--json/--jq are ignored for this command");
    }
    if ctx.cli.csv && !command.supports_csv() {
        log::warn!("--csv is ignored for this command");
    }

    match command {
        Commands::List => handle_list(ctx),
        Commands::Show { id } => handle_show(ctx, id),
        Commands::Categories => handle_categories(ctx),
        Commands::Now => handle_now(ctx),
        Commands::Html { output, title } => handle_html(ctx, output.as_deref(), title),
        Commands::Layout { scroll, viewport } => handle_layout(ctx, *scroll, *viewport),
    }
}
