//! Operation orchestration.
//!
//! [`MatrixEngine`] owns the host collaborators and drives each
//! operation end to end: bulk-read the source tables, run the pure
//! construction/extraction/join logic, then bulk-write the artifact and
//! apply the styling contract. Confirmation prompts fire before the
//! first mutation, so a declined prompt always leaves the prior artifact
//! fully intact.

use tracing::debug;

use crate::error::{OperationError, OperationResult};
use crate::matrix::{
    auto_size_columns, build_selection_grid, build_visualization_grid, capture_widths,
    extract_selections, restore_widths, HEADER_COLS, HEADER_ROWS, NAME_COLUMN_WIDTH,
};
use crate::models::{AllocationColumns, AllocationRecord, Cell, Grid, Person, Role, Slot};
use crate::reference::{self, AnnotationMap, LabelMap};
use crate::reset::{reset_target, RESET_TARGETS};
use crate::store::{Confirmer, HAlign, Range, TableStore, VAlign};
use crate::tables;

/// Tunable engine behavior.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Include the unresolved-record count in the visualize notification.
    /// Off restores the original silent-skip behavior.
    pub report_unresolved: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            report_unresolved: true,
        }
    }
}

/// Outcome of a selection matrix build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    /// People placed as rows.
    pub people: usize,
    /// Slots placed as columns.
    pub slots: usize,
}

/// Outcome of a selection extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractReport {
    /// Pairs written to the flat availability table.
    pub pairs: usize,
}

/// Outcome of one visualization render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualizeReport {
    /// Allocation records that landed in a cell.
    pub applied: usize,
    /// Records skipped over unresolved person/slot references.
    pub skipped: usize,
}

/// Outcome of a full output reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetReport {
    /// Tables that existed and were reset.
    pub tables_reset: usize,
}

/// Drives matrix operations against an injected host.
pub struct MatrixEngine<S, C> {
    store: S,
    confirmer: C,
    options: EngineOptions,
}

impl<S: TableStore, C: Confirmer> MatrixEngine<S, C> {
    /// Creates an engine with default options.
    pub fn new(store: S, confirmer: C) -> Self {
        Self {
            store,
            confirmer,
            options: EngineOptions::default(),
        }
    }

    /// Overrides the engine options.
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Borrows the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Borrows the confirmer.
    pub fn confirmer(&self) -> &C {
        &self.confirmer
    }

    /// Consumes the engine, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Builds (or rebuilds) the editable selection matrix for one role.
    ///
    /// Rebuilding an existing matrix asks for confirmation first; the
    /// checked cells are lost but column widths survive.
    pub fn build_selection_matrix(&mut self, role: Role) -> OperationResult<BuildReport> {
        let ui = role.selection_table();
        debug!(table = ui, "building selection matrix");
        self.require_tables(&[tables::LESSON_SLOT, role.roster_table()])?;

        let time_labels = self.label_map_from(tables::TIME_RANGE);
        let courses = self.label_map_from(tables::SUBJECT);
        let notes = self.annotations_for(role, &courses);
        let slots = self.read_slots();
        let people = self.read_people(role.roster_table());

        let existed = self.store.table_exists(ui);
        if existed {
            let prompt = format!(
                "Rebuild '{ui}'? Checked cells will be cleared; column widths are kept."
            );
            if !self.confirmer.confirm(&prompt) {
                return Err(OperationError::UserDeclined);
            }
        } else {
            self.store.insert_table(ui);
        }
        let saved = if existed {
            capture_widths(&self.store, ui)
        } else {
            None
        };

        let grid = build_selection_grid(&slots, &people, &notes, &time_labels, role);
        let (rows, cols) = (grid.rows(), grid.cols());
        self.store.clear(ui);
        self.store.write_range(ui, 0, 0, grid.into_rows());
        if !people.is_empty() && !slots.is_empty() {
            self.store.insert_checkboxes(
                ui,
                Range::new(HEADER_ROWS, HEADER_COLS, people.len(), slots.len()),
            );
        }

        self.apply_frame_styling(ui);
        let header_row = Range::new(1, 0, 1, cols);
        self.store.set_bold(ui, header_row);
        self.store
            .set_horizontal_alignment(ui, header_row, HAlign::Center);
        if !people.is_empty() {
            let name_col = Range::new(HEADER_ROWS, 1, people.len(), 1);
            self.store.set_wrap(ui, name_col);
            self.store
                .set_vertical_alignment(ui, name_col, VAlign::Middle);
        }

        match saved {
            Some(widths) => restore_widths(&mut self.store, ui, &widths, cols),
            None => auto_size_columns(&mut self.store, ui, cols, Some(NAME_COLUMN_WIDTH)),
        }

        let report = BuildReport {
            people: people.len(),
            slots: slots.len(),
        };
        if report.people == 0 || report.slots == 0 {
            self.confirmer
                .notify(&format!("Updated '{ui}', but the source tables have no data."));
        } else {
            self.confirmer.notify(&format!(
                "Updated '{ui}': {} people x {} slots. ({rows} x {cols} cells)",
                report.people, report.slots
            ));
        }
        Ok(report)
    }

    /// Extracts checked pairs from the selection matrix into the flat
    /// availability table for one role.
    pub fn extract_selections(&mut self, role: Role) -> OperationResult<ExtractReport> {
        let ui = role.selection_table();
        let output = role.availability_table();
        debug!(from = ui, to = output, "extracting selections");
        self.require_tables(&[ui])?;
        self.store.insert_table(output);

        let rows = self.store.row_count(ui);
        let cols = self.store.column_count(ui);
        if rows <= HEADER_ROWS || cols <= HEADER_COLS {
            self.confirmer
                .notify(&format!("'{ui}' has no data to save."));
            return Ok(ExtractReport { pairs: 0 });
        }

        let grid = Grid::from_rows(self.store.read_range(ui, Range::new(0, 0, rows, cols)));
        let pairs = extract_selections(&grid);

        self.store.clear(output);
        self.store.append_row(
            output,
            vec![Cell::text(role.id_column()), Cell::text("slot_id")],
        );
        if !pairs.is_empty() {
            let data = pairs
                .iter()
                .map(|&(p, s)| vec![Cell::Id(p), Cell::Id(s)])
                .collect();
            self.store.write_range(output, 1, 0, data);
        }

        let report = ExtractReport { pairs: pairs.len() };
        if report.pairs == 0 {
            self.confirmer
                .notify(&format!("Saved to '{output}': no cells were checked."));
        } else {
            self.confirmer
                .notify(&format!("Saved {} selections to '{output}'.", report.pairs));
        }
        Ok(report)
    }

    /// Renders the allocation table as a schedule matrix for one
    /// perspective. The artifact is rebuilt from scratch on every call.
    pub fn visualize(&mut self, role: Role) -> OperationResult<VisualizeReport> {
        let viz = role.visualization_table();
        debug!(table = viz, "rendering visualization matrix");
        self.require_tables(&[
            tables::ALLOCATED_LESSONS,
            tables::LESSON_SLOT,
            role.roster_table(),
        ])?;

        let time_labels = self.label_map_from(tables::TIME_RANGE);
        let slots = self.read_slots();
        let people = self.read_people(role.roster_table());
        let (records, unreadable) = self.read_allocations()?;

        let existed = self.store.table_exists(viz);
        let saved = if existed {
            capture_widths(&self.store, viz)
        } else {
            self.store.insert_table(viz);
            None
        };

        let outcome = build_visualization_grid(&slots, &people, &time_labels, &records, role);
        let (rows, cols) = (outcome.grid.rows(), outcome.grid.cols());
        self.store.clear(viz);
        self.store.write_range(viz, 0, 0, outcome.grid.into_rows());

        self.apply_frame_styling(viz);
        if !people.is_empty() && !slots.is_empty() {
            let data = Range::new(HEADER_ROWS, HEADER_COLS, people.len(), slots.len());
            self.store.set_wrap(viz, data);
            self.store.set_vertical_alignment(viz, data, VAlign::Middle);
            self.store
                .set_horizontal_alignment(viz, data, HAlign::Center);
        }
        if rows > 1 && cols > 1 {
            self.store
                .set_border(viz, Range::new(1, 1, rows - 1, cols - 1));
        }

        match saved {
            Some(widths) => restore_widths(&mut self.store, viz, &widths, cols),
            None => auto_size_columns(&mut self.store, viz, cols, None),
        }

        let report = VisualizeReport {
            applied: outcome.applied,
            skipped: outcome.skipped + unreadable,
        };
        let mut message = format!(
            "Rendered '{viz}': {} assignments placed.",
            report.applied
        );
        if self.options.report_unresolved && report.skipped > 0 {
            message.push_str(&format!(
                " {} records referenced unknown ids and were skipped.",
                report.skipped
            ));
        }
        self.confirmer.notify(&message);
        Ok(report)
    }

    /// Renders both perspectives, student first.
    pub fn visualize_all(&mut self) -> OperationResult<(VisualizeReport, VisualizeReport)> {
        let student = self.visualize(Role::Student)?;
        let teacher = self.visualize(Role::Teacher)?;
        Ok((student, teacher))
    }

    /// Resets all optimizer outputs and both visualization matrices.
    pub fn reset_outputs(&mut self) -> OperationResult<ResetReport> {
        let listing = RESET_TARGETS
            .iter()
            .map(|t| format!("- {}", t.table))
            .collect::<Vec<_>>()
            .join("\n");
        let prompt =
            format!("This deletes all data in the following tables:\n{listing}\nProceed?");
        if !self.confirmer.confirm(&prompt) {
            return Err(OperationError::UserDeclined);
        }

        let mut count = 0;
        for target in RESET_TARGETS {
            if reset_target(&mut self.store, *target) {
                count += 1;
            }
        }

        self.confirmer.notify(&format!(
            "Reset complete: {count} tables cleared. Rerun the optimizer to produce new results."
        ));
        Ok(ResetReport {
            tables_reset: count,
        })
    }

    fn require_tables(&self, names: &[&str]) -> OperationResult<()> {
        for name in names {
            if !self.store.table_exists(name) {
                self.confirmer
                    .notify(&format!("Error: required table '{name}' was not found."));
                return Err(OperationError::missing_table(*name));
            }
        }
        Ok(())
    }

    /// Data rows of a table (everything below the header row), or empty
    /// when the table is absent or header-only.
    fn read_data_rows(&self, table: &str, cols: usize) -> Vec<Vec<Cell>> {
        let rows = self.store.row_count(table);
        if !self.store.table_exists(table) || rows <= 1 {
            return Vec::new();
        }
        self.store.read_range(table, Range::new(1, 0, rows - 1, cols))
    }

    fn label_map_from(&self, table: &str) -> LabelMap {
        reference::label_map(&self.read_data_rows(table, 2))
    }

    fn annotations_for(&self, role: Role, courses: &LabelMap) -> AnnotationMap {
        let cols = if role.has_session_count() { 4 } else { 2 };
        let rows = self.read_data_rows(role.requirement_table(), cols);
        let records = reference::requirement_records(role, &rows);
        reference::annotations(&records, courses)
    }

    fn read_slots(&self) -> Vec<Slot> {
        self.read_data_rows(tables::LESSON_SLOT, 3)
            .iter()
            .filter_map(|row| Slot::from_row(row))
            .collect()
    }

    fn read_people(&self, roster: &str) -> Vec<Person> {
        self.read_data_rows(roster, 2)
            .iter()
            .filter_map(|row| {
                let id = row.first().and_then(Cell::as_id)?;
                let name = row.get(1).map(Cell::display_text).unwrap_or_default();
                Some(Person::new(id, name))
            })
            .collect()
    }

    /// Reads and parses the allocation table.
    ///
    /// Returns the parsed records plus the count of non-blank rows that
    /// could not be addressed (no readable slot id).
    fn read_allocations(&self) -> OperationResult<(Vec<AllocationRecord>, usize)> {
        let table = tables::ALLOCATED_LESSONS;
        let rows = self.store.row_count(table);
        let cols = self.store.column_count(table);
        let missing = || {
            self.confirmer.notify(&format!(
                "Error: table '{table}' has no 'slot_id' column."
            ));
            OperationError::missing_column(table, "slot_id")
        };
        if rows == 0 || cols == 0 {
            return Err(missing());
        }

        let all = self.store.read_range(table, Range::new(0, 0, rows, cols));
        let (header, data) = match all.split_first() {
            Some(split) => split,
            None => return Err(missing()),
        };
        let columns = AllocationColumns::bind(header).ok_or_else(missing)?;

        let mut records = Vec::new();
        let mut unreadable = 0;
        for row in data {
            if row.iter().all(Cell::is_empty) {
                continue;
            }
            match columns.record(row) {
                Some(rec) => records.push(rec),
                None => unreadable += 1,
            }
        }
        Ok((records, unreadable))
    }

    /// Freeze/hide styling shared by both matrix artifacts: the two
    /// header rows and columns stay pinned, and the machine-id row and
    /// column stay out of sight while remaining machine-readable.
    fn apply_frame_styling(&mut self, table: &str) {
        self.store.freeze(table, HEADER_ROWS, HEADER_COLS);
        self.store.hide_row(table, 0);
        self.store.hide_column(table, 0);
    }
}
