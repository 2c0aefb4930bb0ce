//! Общие операции CRUD для справочников: `GET/POST /<res>`, `PUT /<res>/{id}`,
//! `PATCH /<res>/{id}/status`, `DELETE /<res>/{id}`

use contracts::domain::common::{ActiveDto, EntityId};
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_error::ApiError;
use super::http;
use super::list_utils::{ListController, Searchable, Sortable};
use super::toast::{use_toast, ToastService};
use leptos::prelude::*;

/// Запись с идентификатором и флагом активности
pub trait ActiveRecord {
    fn id(&self) -> EntityId;
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

pub async fn fetch_all<T: DeserializeOwned>(resource: &str) -> Result<Vec<T>, ApiError> {
    http::get_json(resource).await
}

/// Создание (`id == None`) или обновление
pub async fn save<D: Serialize>(
    resource: &str,
    id: Option<EntityId>,
    dto: &D,
) -> Result<(), ApiError> {
    match id {
        Some(id) => http::put(&format!("{}/{}", resource, id), dto).await,
        None => http::post(resource, dto).await,
    }
}

pub async fn set_status(resource: &str, id: EntityId, active: bool) -> Result<(), ApiError> {
    http::patch(&format!("{}/{}/status", resource, id), &ActiveDto { active }).await
}

pub async fn remove(resource: &str, id: EntityId) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", resource, id)).await
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Оптимистичное переключение: меняем локально, PATCH, при ошибке откатываем
pub fn toggle_active<T>(
    controller: ListController<T>,
    resource: &'static str,
    id: EntityId,
    active: bool,
    toast: ToastService,
) where
    T: ActiveRecord + Searchable + Sortable + Clone + Send + Sync + 'static,
{
    controller.update_where(|r| r.id() == id, |r| r.set_active(active));
    spawn_local(async move {
        match set_status(resource, id, active).await {
            Ok(()) => toast.success(if active {
                "Registro activado"
            } else {
                "Registro desactivado"
            }),
            Err(e) => {
                log::warn!("status toggle {}/{} reverted: {}", resource, id, e);
                controller.update_where(|r| r.id() == id, |r| r.set_active(!active));
                toast.error(e.user_message());
            }
        }
    });
}

/// Удаление с подтверждением и перезагрузкой списка
pub fn delete_with_confirm(
    resource: &'static str,
    id: EntityId,
    label: String,
    toast: ToastService,
    reload: impl Fn() + 'static,
) {
    if !confirm(&format!("¿Eliminar «{}»?", label)) {
        return;
    }
    spawn_local(async move {
        match remove(resource, id).await {
            Ok(()) => {
                toast.success("Registro eliminado");
                reload();
            }
            Err(e) => toast.error(e.user_message()),
        }
    });
}

/// Опции для `<select>`: загружаются один раз, `map` отбрасывает неактивные
pub fn load_options<E: DeserializeOwned + 'static>(
    resource: &'static str,
    map: fn(&E) -> Option<(EntityId, String)>,
) -> RwSignal<Vec<(String, String)>> {
    let options = RwSignal::new(Vec::new());
    spawn_local(async move {
        match fetch_all::<E>(resource).await {
            Ok(items) => options.set(
                items
                    .iter()
                    .filter_map(map)
                    .map(|(id, name)| (id.to_string(), name))
                    .collect(),
            ),
            Err(e) => log::warn!("options {} not loaded: {}", resource, e),
        }
    });
    options
}

/// Состояние модальной формы: ошибка, флаг отправки, колбэк успеха
#[derive(Clone, Copy)]
pub struct FormContext {
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub toast: ToastService,
    pub on_saved: Callback<()>,
}

impl FormContext {
    pub fn new(on_saved: Callback<()>) -> Self {
        Self {
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            toast: use_toast(),
            on_saved,
        }
    }

    pub fn fail(&self, e: impl Into<ApiError>) {
        self.error.set(Some(e.into().user_message()));
    }

    /// POST/PUT записи; при успехе toast и `on_saved`, при ошибке текст в форме
    pub fn submit<D: Serialize + 'static>(&self, resource: &'static str, id: Option<EntityId>, dto: D) {
        let this = *self;
        this.error.set(None);
        this.saving.set(true);
        spawn_local(async move {
            let result = save(resource, id, &dto).await;
            this.saving.set(false);
            match result {
                Ok(()) => {
                    this.toast.success(if id.is_some() {
                        "Cambios guardados"
                    } else {
                        "Registro creado"
                    });
                    this.on_saved.run(());
                }
                Err(e) => {
                    log::warn!("save {} failed: {}", resource, e);
                    this.fail(e);
                }
            }
        });
    }
}
