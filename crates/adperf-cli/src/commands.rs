use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use serde_json::json;
use tracing::{info, info_span};

use adperf_core::{
    AggregateOptions, COMPARISON_CHART_LIMIT, COMPARISON_TABLE_LIMIT, DEFAULT_CHART_COUNT,
    DEFAULT_PUBLISHER_LIMIT, MIN_COMPARISON_DATASETS, aggregate_with, campaign_filter,
    dashboard_stats, filter_by_campaign, rank_comparison_rows, sort_publishers, top_publishers,
};
use adperf_ingest::{campaigns_with_all, format_file_size, read_records_file, validate_file_type};
use adperf_model::{ALL_CAMPAIGNS_NAME, Dataset, DatasetId, RawRecord};
use adperf_persistence::{Dashboard, JsonFileStore, UploadRequest};

use crate::cli::{CampaignsArgs, CompareArgs, RenameArgs, ReportArgs, ShowArgs, SortArgs, UploadArgs};
use adperf_cli::summary::{
    campaign_table, comparison_table, dataset_table, publisher_table, stats_summary,
};

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let span = info_span!("report", file = %args.file.display());
    let _guard = span.enter();

    let records = read_export(&args.file)?;
    let campaigns = campaigns_with_all(&records);
    let publishers = aggregate_with(
        &filter_by_campaign(&records, args.campaign.as_deref()),
        &report_options(args),
    );
    let stats = dashboard_stats(&publishers);
    let shown = if args.chart {
        top_publishers(&publishers, DEFAULT_CHART_COUNT)
    } else {
        &publishers[..]
    };
    let publishers = sort_publishers(shown, args.sort.sort.into(), args.sort.direction.into());
    info!(rows = records.len(), publishers = publishers.len(), "report ready");

    if args.json {
        let output = json!({
            "campaigns": campaigns,
            "stats": stats,
            "publishers": publishers,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("serialize report")?
        );
        return Ok(());
    }

    println!("File: {}", args.file.display());
    println!(
        "Campaign: {}",
        campaign_filter(args.campaign.as_deref()).unwrap_or(ALL_CAMPAIGNS_NAME)
    );
    println!("{}", stats_summary(&stats));
    println!("{}", publisher_table(&publishers, &stats));
    Ok(())
}

pub fn run_campaigns(args: &CampaignsArgs) -> Result<()> {
    let records = read_export(&args.file)?;
    println!("{}", campaign_table(&campaigns_with_all(&records)));
    Ok(())
}

pub fn run_upload(state: &Path, args: &UploadArgs) -> Result<()> {
    let (store, mut dashboard) = open_state(state);
    let file_name = file_name_of(&args.file);
    let contents = fs::read_to_string(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let size = format_file_size(contents.len() as u64);

    let mut request = UploadRequest::new(file_name, contents);
    if let Some(name) = &args.name {
        request = request.with_name(name);
    }
    if let Some(mime) = &args.mime {
        request = request.with_mime(mime);
    }
    let id = dashboard
        .upload(request)
        .with_context(|| format!("upload {}", args.file.display()))?;
    dashboard.persist(&store);

    let dataset = require_dataset(&dashboard, &id)?;
    println!(
        "Uploaded {} as {} ({size}, {} rows, {} publishers)",
        dataset.name,
        dataset.id,
        dataset.row_count(),
        dataset.processed_data.len()
    );
    Ok(())
}

pub fn run_list(state: &Path) -> Result<()> {
    let (_, dashboard) = open_state(state);
    if dashboard.is_empty() {
        println!("No datasets uploaded. Run `adperf upload <FILE>` to add one.");
        return Ok(());
    }
    println!("{}", dataset_table(&dashboard));
    Ok(())
}

pub fn run_show(state: &Path, args: &ShowArgs) -> Result<()> {
    let (store, mut dashboard) = open_state(state);
    let id = match &args.id {
        Some(id) => DatasetId::from(id.as_str()),
        None => match dashboard.active_dataset_id() {
            Some(id) => id.clone(),
            None => bail!("No dataset uploaded yet. Run `adperf upload <FILE>` first."),
        },
    };

    if let Some(campaign) = &args.campaign {
        dashboard
            .select_campaign(&id, Some(campaign.as_str()))
            .with_context(|| format!("filter {id}"))?;
        dashboard.persist(&store);
    }

    let dataset = require_dataset(&dashboard, &id)?;
    print_dataset(dataset, &args.sort);
    Ok(())
}

pub fn run_rename(state: &Path, args: &RenameArgs) -> Result<()> {
    let (store, mut dashboard) = open_state(state);
    let id = DatasetId::from(args.id.as_str());
    dashboard
        .rename(&id, &args.name)
        .with_context(|| format!("rename {id}"))?;
    dashboard.persist(&store);
    println!("Dataset {id} is now named {}", require_dataset(&dashboard, &id)?.name);
    Ok(())
}

pub fn run_delete(state: &Path, id: &str) -> Result<()> {
    let (store, mut dashboard) = open_state(state);
    let id = DatasetId::from(id);
    let removed = dashboard
        .delete(&id)
        .with_context(|| format!("delete {id}"))?;
    dashboard.persist(&store);
    println!("Deleted {} ({id})", removed.name);
    if let Some(active) = dashboard.active_dataset() {
        println!("Active dataset: {} ({})", active.name, active.id);
    }
    Ok(())
}

pub fn run_activate(state: &Path, id: &str) -> Result<()> {
    let (store, mut dashboard) = open_state(state);
    let id = DatasetId::from(id);
    dashboard
        .set_active(&id)
        .with_context(|| format!("activate {id}"))?;
    dashboard.persist(&store);
    println!("Active dataset: {id}");
    Ok(())
}

pub fn run_compare(state: &Path, args: &CompareArgs) -> Result<()> {
    let (store, mut dashboard) = open_state(state);
    let ids: Vec<DatasetId> = args.ids.iter().map(|id| DatasetId::from(id.as_str())).collect();
    dashboard.select_for_comparison(&ids);
    dashboard.set_comparison_mode(true);
    dashboard.persist(&store);

    let selected: Vec<&Dataset> = dashboard
        .selected_datasets()
        .into_iter()
        .map(Arc::as_ref)
        .collect();
    if selected.len() < MIN_COMPARISON_DATASETS {
        println!("Select at least two datasets to compare. Run `adperf list` to see their ids.");
        return Ok(());
    }

    let rows = dashboard.comparison();
    let limit = if args.chart {
        COMPARISON_CHART_LIMIT
    } else {
        COMPARISON_TABLE_LIMIT
    };
    let ranked = rank_comparison_rows(&rows, limit);
    println!("{}", comparison_table(&selected, &ranked));
    if rows.len() > limit {
        println!("Showing top {limit} of {} publishers", rows.len());
    }
    Ok(())
}

pub fn run_clear(state: &Path) -> Result<()> {
    let (store, mut dashboard) = open_state(state);
    let count = dashboard.datasets().len();
    dashboard.clear();
    dashboard.persist(&store);
    println!("Removed {count} dataset(s)");
    Ok(())
}

fn report_options(args: &ReportArgs) -> AggregateOptions {
    if args.all {
        AggregateOptions::untruncated()
    } else {
        AggregateOptions::default().with_limit(args.limit.or(Some(DEFAULT_PUBLISHER_LIMIT)))
    }
}

fn print_dataset(dataset: &Dataset, sort: &SortArgs) {
    println!("Dataset: {} ({})", dataset.name, dataset.id);
    println!("File: {}", dataset.file_name);
    println!("Campaign: {}", dataset.campaign_label());
    println!("{}", stats_summary(&dataset.stats));
    let publishers = sort_publishers(&dataset.processed_data, sort.sort.into(), sort.direction.into());
    println!("{}", publisher_table(&publishers, &dataset.stats));
}

fn open_state(path: &Path) -> (JsonFileStore, Dashboard) {
    let store = JsonFileStore::new(path);
    let dashboard = Dashboard::restore(&store);
    (store, dashboard)
}

fn require_dataset<'a>(dashboard: &'a Dashboard, id: &DatasetId) -> Result<&'a Dataset> {
    match dashboard.dataset(id) {
        Some(dataset) => Ok(dataset.as_ref()),
        None => bail!("Dataset not found: {id}"),
    }
}

fn read_export(path: &Path) -> Result<Vec<RawRecord>> {
    validate_file_type(&file_name_of(path), None)?;
    read_records_file(path).with_context(|| format!("read {}", path.display()))
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
