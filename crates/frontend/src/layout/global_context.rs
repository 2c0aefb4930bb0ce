use contracts::system::access::Module;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Состояние оболочки: открытые вкладки, активная вкладка, сайдбар
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// `?active=key` из строки запроса
pub fn parse_active(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

pub fn active_query(key: &str) -> String {
    let query =
        serde_qs::to_string(&HashMap::from([("active".to_string(), key.to_string())]))
            .unwrap_or_default();
    format!("?{}", query)
}

/// Какая вкладка станет активной после закрытия `closing`
pub fn next_active_after_close(tabs: &[Tab], closing: &str, active: Option<&str>) -> Option<String> {
    if active != Some(closing) {
        return active.map(str::to_string);
    }
    let pos = tabs.iter().position(|t| t.key == closing)?;
    tabs.get(pos + 1)
        .or_else(|| pos.checked_sub(1).and_then(|p| tabs.get(p)))
        .map(|t| t.key.clone())
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Открывает вкладку из `?active=` и синхронизирует URL с активной вкладкой
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match parse_active(&search).as_deref().and_then(Module::from_key) {
            Some(module) => self.open_module(module),
            None => log::debug!("no initial tab in query '{}'", search),
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = active_query(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_module(&self, module: Module) {
        self.open_tab(module.key(), module.label());
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open tab '{}'", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close tab '{}'", key);
        let next = self.opened.with_untracked(|tabs| {
            self.active
                .with_untracked(|a| next_active_after_close(tabs, key, a.as_deref()))
        });
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        self.active.set(next);
    }

    /// Закрывает все вкладки (выход из системы)
    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|k| Tab {
                key: k.to_string(),
                title: k.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_parse_active() {
        assert_eq!(parse_active("?active=sales"), Some("sales".to_string()));
        assert_eq!(parse_active("?active="), None);
        assert_eq!(parse_active(""), None);
        assert_eq!(active_query("cash_register"), "?active=cash_register");
    }

    #[test]
    fn test_next_active_after_close() {
        let t = tabs(&["sales", "kardex", "users"]);
        // закрываем неактивную: активная не меняется
        assert_eq!(
            next_active_after_close(&t, "users", Some("sales")),
            Some("sales".to_string())
        );
        // закрываем активную в середине: соседняя справа
        assert_eq!(
            next_active_after_close(&t, "kardex", Some("kardex")),
            Some("users".to_string())
        );
        // последняя: соседняя слева
        assert_eq!(
            next_active_after_close(&t, "users", Some("users")),
            Some("kardex".to_string())
        );
        assert_eq!(next_active_after_close(&tabs(&["sales"]), "sales", Some("sales")), None);
    }
}
