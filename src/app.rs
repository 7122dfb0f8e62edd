use std::rc::Rc;

use dioxus::html::HasFileData;
use dioxus::prelude::*;
use tracing::warn;

use crate::conf::{load_app_config, AppConfig};
use crate::domain::entities::batch::{IntakeSource, PendingImport};
use crate::domain::entities::table::TableView;
use crate::infra::http::client::HttpTableApi;
use crate::platform::dialog::{pick_json_file, show_message};
use crate::ui::files::DroppedFile;
use crate::ui::notice::{add_row_notice, selection_notice, submit_notice};
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::file_source::SelectedFile;
use crate::usecase::ports::table_api::TableApi;
use crate::usecase::services::edit_service::{EditService, RowForm};
use crate::usecase::services::ingestion::IngestionState;
use crate::usecase::services::intake::{first_file, FileIntake};
use crate::usecase::services::query_service::QueryService;
use crate::usecase::services::script_service::ScriptService;
use crate::usecase::services::submission::SubmissionController;

const PREVIEW_ROW_LIMIT: usize = 50;

#[component]
fn PreviewPanel(
    pending: PendingImport,
    submitting: bool,
    can_confirm: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let columns = pending.batch.columns();
    let rows = pending.batch.rows().to_vec();
    let total = pending.row_count();
    let parsed_at = pending.parsed_at.format("%H:%M:%S").to_string();
    let source_label = pending.source.label();

    rsx! {
        div {
            style: "border: 1px solid #bbb; border-radius: 8px; padding: 12px; margin: 12px 0; background: #fafcff;",
            div {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; margin-bottom: 8px;",
                strong { "預覽：{pending.file_name}" }
                span { "共 {total} 筆（{source_label}，{parsed_at} 解析）" }
                button {
                    disabled: !can_confirm,
                    onclick: move |_| on_confirm.call(()),
                    if submitting { "送出中…" } else { "確認送出" }
                }
                button {
                    disabled: submitting,
                    onclick: move |_| on_cancel.call(()),
                    "取消"
                }
            }
            if total == 0 {
                p { "檔案內沒有任何資料列" }
            } else {
                div {
                    style: "max-height: 280px; overflow: auto;",
                    table {
                        style: "border-collapse: collapse; width: 100%;",
                        thead {
                            tr {
                                for column in columns.clone() {
                                    th { style: "border-bottom: 1px solid #ccc; text-align: left; padding: 4px 8px;", "{column}" }
                                }
                            }
                        }
                        tbody {
                            for row in rows.iter().take(PREVIEW_ROW_LIMIT) {
                                tr {
                                    for column in columns.iter() {
                                        td { style: "padding: 4px 8px;", {row.display_value(column)} }
                                    }
                                }
                            }
                        }
                    }
                }
                if total > PREVIEW_ROW_LIMIT {
                    p { "僅顯示前 {PREVIEW_ROW_LIMIT} 筆" }
                }
            }
        }
    }
}

#[component]
fn TableOutput(view: TableView) -> Element {
    let Some(snapshot) = view.snapshot.clone() else {
        return rsx! {
            p {
                if view.loading { "載入中…" } else { "尚未載入資料" }
            }
            if let Some(err) = view.last_error.clone() {
                p { style: "color: #b00020;", "{err}" }
            }
        };
    };
    let columns = snapshot.columns();
    let json = snapshot.pretty_json();
    let row_count = snapshot.rows.len();

    rsx! {
        if let Some(err) = view.last_error.clone() {
            p { style: "color: #b00020;", "最近一次載入失敗：{err}" }
        }
        div {
            style: "overflow: auto; max-height: 420px; border: 1px solid #ddd;",
            table {
                style: "border-collapse: collapse; width: 100%;",
                thead {
                    tr {
                        for column in columns.clone() {
                            th { style: "position: sticky; top: 0; background: #f4f4f4; text-align: left; padding: 4px 8px;", "{column}" }
                        }
                    }
                }
                tbody {
                    for row in snapshot.rows.iter() {
                        tr {
                            for column in columns.iter() {
                                td { style: "padding: 4px 8px; border-top: 1px solid #eee;", {row.display_value(column)} }
                            }
                        }
                    }
                }
            }
        }
        details {
            summary { "原始 JSON（{row_count} 筆）" }
            pre { "{json}" }
        }
    }
}

#[component]
pub fn App() -> Element {
    let (config, config_error) = use_hook(|| match load_app_config() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err.to_string())),
    });

    let AppState {
        workflow,
        table_view,
        mut drop_zone,
        mut status,
        mut row_form,
        mut adding_row,
        mut script_name,
        mut script_output,
        mut running_script,
    } = AppState::new();

    let base_url = config.server.base_url.clone();
    let api: Rc<dyn TableApi> =
        use_hook(move || Rc::new(HttpTableApi::new(&base_url)) as Rc<dyn TableApi>);

    let query_service = QueryService::new(api.clone(), config.table.name.clone(), table_view);
    let intake = FileIntake::new(workflow);
    let submission = SubmissionController::new(api.clone(), workflow, query_service.clone());
    let edit_service = EditService::new(api.clone(), query_service.clone());
    let script_service = ScriptService::new(api.clone());

    let query_service_for_init = query_service.clone();
    use_hook(move || {
        let query_service = query_service_for_init.clone();
        spawn(async move {
            if let Some(err) = config_error {
                warn!(error = %err, "falling back to default config");
                status.set(format!("設定載入失敗，使用預設值：{err}"));
            }
            if let Err(err) = query_service.refresh().await {
                status.set(err.notice());
            }
        });
    });

    let query_service_for_refresh = query_service.clone();
    let intake_for_picker = intake.clone();
    let intake_for_drop = intake.clone();
    let submission_for_confirm = submission.clone();
    let submission_for_cancel = submission.clone();

    let ingestion = workflow();
    let submitting = ingestion.is_submitting();
    let drop_active = drop_zone().is_active();
    let drop_style = if drop_active {
        "border: 2px dashed #3b6fd8; background: #eef4ff;"
    } else {
        "border: 2px dashed #bbb; background: #fff;"
    };
    let parsing_label = match ingestion.state() {
        IngestionState::Parsing { file_name } => Some(format!("正在解析 {file_name}")),
        _ => None,
    };
    let current_form = row_form();
    let current_output = script_output();
    let view_snapshot = table_view();
    let refreshing = view_snapshot.loading;

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 12px; display: flex; flex-direction: column; gap: 12px;",
            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                button {
                    disabled: refreshing,
                    onclick: move |_| {
                        let query_service = query_service_for_refresh.clone();
                        async move {
                            match query_service.refresh().await {
                                Ok(rows) => status.set(format!("已重新整理（{rows} 筆）")),
                                Err(err) => status.set(err.notice()),
                            }
                        }
                    },
                    "重新整理"
                }
                span { "資料表：{config.table.name}" }
                span { " {status}" }
            }

            section {
                h3 { "批次匯入" }
                div {
                    style: "{drop_style} border-radius: 8px; padding: 24px; text-align: center;",
                    ondragenter: move |event| {
                        event.prevent_default();
                        drop_zone.write().enter();
                    },
                    ondragover: move |event| {
                        event.prevent_default();
                    },
                    ondragleave: move |_| {
                        drop_zone.write().leave();
                    },
                    ondrop: move |event| {
                        event.prevent_default();
                        drop_zone.write().reset();
                        let files = event.files();
                        let intake = intake_for_drop.clone();
                        async move {
                            let Some((file, ignored)) = first_file(files) else {
                                status.set("未偵測到檔案".to_string());
                                return;
                            };
                            let file = DroppedFile::new(file);
                            let result = intake.select_file(&file, IntakeSource::Drop).await;
                            if let Some(notice) = selection_notice(&result, ignored) {
                                status.set(notice);
                            }
                        }
                    },
                    p { "將 JSON 檔案拖放到此處，或" }
                    button {
                        disabled: submitting,
                        onclick: move |_| {
                            let intake = intake_for_picker.clone();
                            async move {
                                let Some(file) = pick_json_file().await else {
                                    status.set("已取消選擇檔案".to_string());
                                    return;
                                };
                                status.set(format!("正在解析 {}", file.name()));
                                let result = intake.select_file(&file, IntakeSource::Picker).await;
                                if let Some(notice) = selection_notice(&result, 0) {
                                    status.set(notice);
                                }
                            }
                        },
                        "選擇檔案"
                    }
                    if let Some(label) = parsing_label {
                        p { "{label}" }
                    }
                }

                if let Some(pending) = ingestion.pending().cloned() {
                    PreviewPanel {
                        pending,
                        submitting,
                        can_confirm: ingestion.can_confirm(),
                        on_confirm: move |_| {
                            let submission = submission_for_confirm.clone();
                            spawn(async move {
                                let result = submission.confirm().await;
                                status.set(submit_notice(&result));
                                if let Ok(outcome) = result {
                                    show_message("匯入完成", &outcome.message).await;
                                }
                            });
                        },
                        on_cancel: move |_| {
                            match submission_for_cancel.cancel() {
                                Ok(()) => status.set("已取消匯入".to_string()),
                                Err(err) => status.set(err.notice()),
                            }
                        },
                    }
                }
            }

            section {
                h3 { "新增單筆資料" }
                div {
                    style: "display: grid; grid-template-columns: 80px 240px; gap: 6px; align-items: center;",
                    label { "title" }
                    input {
                        value: "{current_form.title}",
                        oninput: move |event| row_form.write().title = event.value(),
                    }
                    label { "field1" }
                    input {
                        value: "{current_form.field1}",
                        oninput: move |event| row_form.write().field1 = event.value(),
                    }
                    label { "field2" }
                    input {
                        value: "{current_form.field2}",
                        oninput: move |event| row_form.write().field2 = event.value(),
                    }
                    label { "field3" }
                    input {
                        value: "{current_form.field3}",
                        oninput: move |event| row_form.write().field3 = event.value(),
                    }
                }
                button {
                    disabled: adding_row(),
                    onclick: move |_| {
                        let edit_service = edit_service.clone();
                        async move {
                            adding_row.set(true);
                            let form = row_form();
                            let result = edit_service.add_row(&form).await;
                            let notice = add_row_notice(&result);
                            status.set(notice.clone());
                            if result.is_ok() {
                                row_form.set(RowForm::default());
                                show_message("新增完成", &notice).await;
                            }
                            adding_row.set(false);
                        }
                    },
                    "新增"
                }
            }

            section {
                h3 { "執行腳本" }
                div {
                    style: "display: flex; gap: 8px; align-items: center;",
                    input {
                        placeholder: "腳本名稱",
                        value: "{script_name}",
                        oninput: move |event| script_name.set(event.value()),
                    }
                    button {
                        disabled: running_script() || script_name().trim().is_empty(),
                        onclick: move |_| {
                            let script_service = script_service.clone();
                            async move {
                                running_script.set(true);
                                match script_service.run(&script_name()).await {
                                    Ok(output) => {
                                        script_output.set(Some(output));
                                        status.set("腳本執行完成".to_string());
                                    }
                                    Err(err) => {
                                        script_output.set(None);
                                        status.set(err.notice());
                                    }
                                }
                                running_script.set(false);
                            }
                        },
                        "執行"
                    }
                }
                if let Some(output) = current_output {
                    if let Some(stdout) = output.output.clone().filter(|text| !text.is_empty()) {
                        pre { "{stdout}" }
                    }
                    if let Some(stderr) = output.error.clone().filter(|text| !text.is_empty()) {
                        pre { style: "color: #b00020;", "{stderr}" }
                    }
                }
            }

            section {
                h3 { "目前資料" }
                TableOutput { view: view_snapshot }
            }
        }
    }
}
