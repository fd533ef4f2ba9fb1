/// Скачивание CSV выгрузок, которые формирует сервер аналитики
use contracts::dashboards::d501_optimal_promotion::PerformanceTable;
use contracts::shared::endpoints::export_path;
use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::api_utils::api_url;
use crate::shared::http::post_binary;

/// Запрашивает выгрузку таблицы эффективности промо и сохраняет её как `<table>.csv`
pub async fn export_performance_table(
    table: PerformanceTable,
    filters: Map<String, Value>,
) -> Result<(), String> {
    let url = api_url(&export_path(table));
    log::debug!("Exporting {} table", table.as_str());

    let bytes = post_binary(&url, &Value::Object(filters), "Export")
        .await
        .map_err(|e| e.to_string())?;

    if bytes.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let blob = create_csv_blob(&bytes)?;
    download_blob(&blob, &table.file_name())
}

/// Создает Blob объект из байтов CSV ответа
fn create_csv_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    // Создаем URL для blob
    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // Временная ссылка для скачивания
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    // Освобождаем URL
    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
