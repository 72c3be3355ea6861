//! Parquet output backend (feature `parquet`).
//!
//! Creates three files in the configured output directory:
//! - `steps.parquet`
//! - `throughput.parquet`
//! - `summary.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{BooleanBuilder, Float64Builder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::row::{StepRow, SummaryRow, ThroughputRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

fn step_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",         DataType::UInt64, false),
        Field::new("reached",      DataType::UInt32, false),
        Field::new("remain_goals", DataType::UInt32, false),
        Field::new("cache_access", DataType::UInt64, false),
        Field::new("cache_hit",    DataType::UInt64, false),
    ]))
}

fn throughput_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",           DataType::UInt64, false),
        Field::new("completed",      DataType::UInt64, false),
        Field::new("remain_goals",   DataType::UInt32, false),
        Field::new("cache_hit_rate", DataType::Float64, false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("cache_hit_rate", DataType::Float64, false),
        Field::new("makespan",       DataType::UInt64,  false),
        Field::new("p0",             DataType::UInt32,  false),
        Field::new("p50",            DataType::UInt32,  false),
        Field::new("p99",            DataType::UInt32,  false),
        Field::new("success",        DataType::Boolean, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes simulation output to three Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footers; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    steps:        Option<ArrowWriter<File>>,
    throughput:   Option<ArrowWriter<File>>,
    summary:      Option<ArrowWriter<File>>,
    step_schema:  Arc<Schema>,
    thpt_schema:  Arc<Schema>,
    summ_schema:  Arc<Schema>,
}

impl ParquetWriter {
    /// Create all three Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let step_schema = step_schema();
        let thpt_schema = throughput_schema();
        let summ_schema = summary_schema();

        let steps = ArrowWriter::try_new(
            File::create(dir.join("steps.parquet"))?,
            Arc::clone(&step_schema),
            Some(snappy_props()),
        )?;
        let throughput = ArrowWriter::try_new(
            File::create(dir.join("throughput.parquet"))?,
            Arc::clone(&thpt_schema),
            Some(snappy_props()),
        )?;
        let summary = ArrowWriter::try_new(
            File::create(dir.join("summary.parquet"))?,
            Arc::clone(&summ_schema),
            Some(snappy_props()),
        )?;

        Ok(Self {
            steps: Some(steps),
            throughput: Some(throughput),
            summary: Some(summary),
            step_schema,
            thpt_schema,
            summ_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()> {
        let Some(writer) = self.steps.as_mut() else {
            return Ok(());
        };

        let mut tick         = UInt64Builder::new();
        let mut reached       = UInt32Builder::new();
        let mut remain_goals  = UInt32Builder::new();
        let mut cache_access  = UInt64Builder::new();
        let mut cache_hit     = UInt64Builder::new();

        tick.append_value(row.tick);
        reached.append_value(row.reached);
        remain_goals.append_value(row.remain_goals);
        cache_access.append_value(row.cache_access);
        cache_hit.append_value(row.cache_hit);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.step_schema),
            vec![
                Arc::new(tick.finish()),
                Arc::new(reached.finish()),
                Arc::new(remain_goals.finish()),
                Arc::new(cache_access.finish()),
                Arc::new(cache_hit.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_throughput(&mut self, row: &ThroughputRow) -> OutputResult<()> {
        let Some(writer) = self.throughput.as_mut() else {
            return Ok(());
        };

        let mut tick           = UInt64Builder::new();
        let mut completed      = UInt64Builder::new();
        let mut remain_goals   = UInt32Builder::new();
        let mut cache_hit_rate = Float64Builder::new();

        tick.append_value(row.tick);
        completed.append_value(row.completed);
        remain_goals.append_value(row.remain_goals);
        cache_hit_rate.append_value(row.cache_hit_rate);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.thpt_schema),
            vec![
                Arc::new(tick.finish()),
                Arc::new(completed.finish()),
                Arc::new(remain_goals.finish()),
                Arc::new(cache_hit_rate.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        let Some(writer) = self.summary.as_mut() else {
            return Ok(());
        };

        let mut cache_hit_rate = Float64Builder::new();
        let mut makespan       = UInt64Builder::new();
        let mut p0             = UInt32Builder::new();
        let mut p50            = UInt32Builder::new();
        let mut p99            = UInt32Builder::new();
        let mut success        = BooleanBuilder::new();

        cache_hit_rate.append_value(row.cache_hit_rate);
        makespan.append_value(row.makespan);
        p0.append_value(row.p0);
        p50.append_value(row.p50);
        p99.append_value(row.p99);
        success.append_value(row.success);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summ_schema),
            vec![
                Arc::new(cache_hit_rate.finish()),
                Arc::new(makespan.finish()),
                Arc::new(p0.finish()),
                Arc::new(p50.finish()),
                Arc::new(p99.finish()),
                Arc::new(success.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.steps.take() {
            w.close()?;
        }
        if let Some(w) = self.throughput.take() {
            w.close()?;
        }
        if let Some(w) = self.summary.take() {
            w.close()?;
        }
        Ok(())
    }
}
