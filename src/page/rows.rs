//! Inline edit/cancel/save and confirmed delete for the records table.
//!
//! Click handlers only locate the row and consult the [`RowBook`]; the
//! `apply_*_outcome` functions do all DOM writes once a request settles, so
//! they can be driven directly with a canned result.
//!
//! [`RowBook`]: crate::state::RowBook

use crate::api::{ApiError, ApiResult};
use crate::dom::{find_row, listen, query_all, query_all_in, query_in, set_field_value, text_of};
use crate::models::{RecordFields, RecordId, TotalCounter};
use crate::page::alerts::insert_success_alert;
use crate::state::{ConfirmAction, NoticeTone, PageState, RowError, RowMode};
use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::Element;

const EDIT_BTN: &str = ".edit-btn";
const CANCEL_BTN: &str = ".cancel-btn";
const SAVE_BTN: &str = ".save-btn";
const DELETE_BTN: &str = ".delete-btn";
const ROW_CONTROLS: &str = ".edit-btn, .cancel-btn, .save-btn, .delete-btn";

pub(crate) const EDITING: &str = "editing";
const TOTAL_BADGE: &str = ".badge.bg-primary";

const VIEW_NOMBRE: &str = ".view-mode:nth-child(1)";
const VIEW_EMAIL: &str = ".view-mode:nth-child(2)";
const VIEW_PROGRAMA: &str = ".view-mode .badge";

const INPUT_NOMBRE: &str = "[name=\"nombre\"]";
const INPUT_EMAIL: &str = "[name=\"email\"]";
const INPUT_PROGRAMA: &str = "[name=\"programa\"]";

pub(crate) const MSG_UPDATED: &str = "Registro actualizado exitosamente";
pub(crate) const MSG_DELETED: &str = "Registro eliminado exitosamente";
pub(crate) const MSG_UPDATE_FAILED: &str = "Error al actualizar el registro";
pub(crate) const MSG_DELETE_FAILED: &str = "Error al eliminar el registro";
pub(crate) const MSG_CONFIRM_DELETE: &str = "¿Estás seguro de que deseas eliminar este registro?";

pub(crate) fn bind_row_actions(state: &PageState) {
    let bind = |selector: &str, handler: fn(&PageState, &Element)| {
        for control in query_all(selector) {
            let state = state.clone();
            let target = control.clone();
            listen(&control, "click", move |_| handler(&state, &target));
        }
    };

    bind(EDIT_BTN, on_edit);
    bind(CANCEL_BTN, on_cancel);
    bind(SAVE_BTN, on_save);
    bind(DELETE_BTN, on_delete);
}

/// Row and id for a clicked control. The id comes from the control's
/// `data-id`, or the row's when the control has none.
fn locate(control: &Element) -> Option<(Element, RecordId)> {
    let row = control.closest("tr").ok().flatten()?;
    let raw = control
        .get_attribute("data-id")
        .or_else(|| row.get_attribute("data-id"))?;
    RecordId::parse(&raw).map(|id| (row, id))
}

fn apply_mode(row: &Element, mode: RowMode) {
    let _ = row
        .class_list()
        .toggle_with_force(EDITING, mode == RowMode::Editing);
}

fn set_row_busy(row: &Element, busy: bool) {
    for control in query_all_in(row, ROW_CONTROLS) {
        if busy {
            let _ = control.set_attribute("disabled", "");
        } else {
            let _ = control.remove_attribute("disabled");
        }
    }
    let _ = row.set_attribute("aria-busy", if busy { "true" } else { "false" });
}

pub(crate) fn read_view(row: &Element) -> RecordFields {
    let text = |sel: &str| query_in(row, sel).map(|el| text_of(&el)).unwrap_or_default();
    RecordFields {
        nombre: text(VIEW_NOMBRE),
        email: text(VIEW_EMAIL),
        programa: text(VIEW_PROGRAMA),
    }
}

fn write_view(row: &Element, fields: &RecordFields) {
    for (sel, value) in [
        (VIEW_NOMBRE, &fields.nombre),
        (VIEW_EMAIL, &fields.email),
        (VIEW_PROGRAMA, &fields.programa),
    ] {
        if let Some(cell) = query_in(row, sel) {
            cell.set_text_content(Some(value));
        }
    }
}

/// Values typed into the row's inputs. `None` if any field is missing.
pub(crate) fn read_inputs(row: &Element) -> Option<RecordFields> {
    let value = |sel: &str| query_in(row, sel).and_then(|el| crate::dom::field_value(&el));
    Some(RecordFields {
        nombre: value(INPUT_NOMBRE)?,
        email: value(INPUT_EMAIL)?,
        programa: value(INPUT_PROGRAMA)?,
    })
}

fn write_inputs(row: &Element, fields: &RecordFields) {
    for (sel, value) in [
        (INPUT_NOMBRE, &fields.nombre),
        (INPUT_EMAIL, &fields.email),
        (INPUT_PROGRAMA, &fields.programa),
    ] {
        if let Some(el) = query_in(row, sel) {
            set_field_value(&el, value);
        }
    }
}

fn failure_text(base: &str, e: &ApiError) -> String {
    match e.user_detail() {
        Some(detail) => format!("{base}: {detail}"),
        None => base.to_string(),
    }
}

fn row_refused(id: &RecordId, action: &str, e: RowError) {
    log!("ignoring {action} on record {id}: {e}");
}

pub(crate) fn on_edit(state: &PageState, control: &Element) {
    let Some((row, id)) = locate(control) else {
        warn!("edit control without a record id");
        return;
    };
    match state.rows.try_update(|book| book.begin_edit(&id)) {
        Some(Ok(())) => apply_mode(&row, RowMode::Editing),
        Some(Err(e)) => row_refused(&id, "edit", e),
        None => {}
    }
}

/// Leaves edit mode and resets the inputs to what the row displays.
pub(crate) fn on_cancel(state: &PageState, control: &Element) {
    let Some((row, id)) = locate(control) else {
        return;
    };
    match state.rows.try_update(|book| book.cancel_edit(&id)) {
        Some(Ok(())) => {
            write_inputs(&row, &read_view(&row));
            apply_mode(&row, RowMode::Viewing);
        }
        Some(Err(e)) => row_refused(&id, "cancel", e),
        None => {}
    }
}

pub(crate) fn on_save(state: &PageState, control: &Element) {
    let Some((row, id)) = locate(control) else {
        warn!("save control without a record id");
        return;
    };

    // Treat a row that looks editing as editing even if this controller
    // never saw the edit click (e.g. server-rendered with the class set).
    if row.class_list().contains(EDITING) {
        let _ = state.rows.try_update(|book| {
            if book.mode(&id) == Some(RowMode::Viewing) && !book.is_busy(&id) {
                let _ = book.begin_edit(&id);
            }
        });
    }

    match state.rows.try_update(|book| book.begin_save(&id)) {
        Some(Ok(())) => {}
        Some(Err(e)) => {
            row_refused(&id, "save", e);
            return;
        }
        None => return,
    }

    let Some(fields) = read_inputs(&row) else {
        error!("record {id}: edit inputs missing from row");
        let _ = state.rows.try_update(|book| book.finish_save(&id, false));
        state.push_notice(NoticeTone::Danger, MSG_UPDATE_FAILED);
        return;
    };

    set_row_busy(&row, true);

    let state = state.clone();
    spawn_local(async move {
        let res = state.client.update_record(&id, &fields).await;
        apply_save_outcome(&state, &id, &fields, res);
    });
}

/// Settles a save: success writes the view cells and leaves edit mode,
/// failure reports and leaves the row as it was.
pub(crate) fn apply_save_outcome(
    state: &PageState,
    id: &RecordId,
    fields: &RecordFields,
    res: ApiResult<()>,
) {
    let ok = res.is_ok();
    match state.rows.try_update(|book| book.finish_save(id, ok)) {
        Some(Ok(_)) => {}
        Some(Err(e)) => {
            row_refused(id, "save response", e);
            return;
        }
        None => return,
    }

    let row = find_row(id.as_str());
    if let Some(row) = &row {
        set_row_busy(row, false);
    }

    match res {
        Ok(()) => {
            let Some(row) = row else {
                return;
            };
            write_view(&row, fields);
            apply_mode(&row, RowMode::Viewing);
            insert_success_alert(state, MSG_UPDATED);
        }
        Err(e) => {
            error!("Error: update of record {id} failed: {e}");
            state.push_notice(NoticeTone::Danger, failure_text(MSG_UPDATE_FAILED, &e));
        }
    }
}

/// Asks for confirmation; the request goes out from [`on_confirm_answer`].
pub(crate) fn on_delete(state: &PageState, control: &Element) {
    let Some((_row, id)) = locate(control) else {
        warn!("delete control without a record id");
        return;
    };
    if state.rows.with_untracked(|book| book.is_busy(&id)) {
        log!("record {id} busy; delete ignored");
        return;
    }
    state.request_confirm(MSG_CONFIRM_DELETE, ConfirmAction::DeleteRecord(id));
}

/// Called by the confirmation dialog. Declining touches nothing.
pub(crate) fn on_confirm_answer(state: &PageState, accepted: bool) {
    let Some(req) = state.take_confirm() else {
        return;
    };
    if !accepted {
        return;
    }
    match req.action {
        ConfirmAction::DeleteRecord(id) => start_delete(state, id),
    }
}

fn start_delete(state: &PageState, id: RecordId) {
    match state.rows.try_update(|book| book.begin_delete(&id)) {
        Some(Ok(())) => {}
        Some(Err(e)) => {
            row_refused(&id, "delete", e);
            return;
        }
        None => return,
    }

    if let Some(row) = find_row(id.as_str()) {
        set_row_busy(&row, true);
    }

    let state = state.clone();
    spawn_local(async move {
        let res = state.client.delete_record(&id).await;
        apply_delete_outcome(&state, &id, res);
    });
}

/// Settles a delete: success removes the row and decrements the total,
/// failure keeps both.
pub(crate) fn apply_delete_outcome(state: &PageState, id: &RecordId, res: ApiResult<()>) {
    let ok = res.is_ok();
    match state.rows.try_update(|book| book.finish_delete(id, ok)) {
        Some(Ok(())) => {}
        Some(Err(e)) => {
            row_refused(id, "delete response", e);
            return;
        }
        None => return,
    }

    let row = find_row(id.as_str());

    match res {
        Ok(()) => {
            if let Some(row) = row {
                row.remove();
            }
            decrement_total();
            insert_success_alert(state, MSG_DELETED);
        }
        Err(e) => {
            if let Some(row) = &row {
                set_row_busy(row, false);
            }
            error!("Error: delete of record {id} failed: {e}");
            state.push_notice(NoticeTone::Danger, failure_text(MSG_DELETE_FAILED, &e));
        }
    }
}

/// Rewrites the first `Total: N` badge as `Total: N-1`.
pub(crate) fn decrement_total() {
    let badge = query_all(TOTAL_BADGE)
        .into_iter()
        .find_map(|el| TotalCounter::parse(&text_of(&el)).map(|total| (el, total)));

    match badge {
        Some((el, total)) => el.set_text_content(Some(&total.decremented().render())),
        None => warn!("no `Total: N` badge to update"),
    }
}
