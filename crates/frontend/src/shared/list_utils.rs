/// Универсальные утилиты для работы со списками: поиск, сортировка, пагинация
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// `needle` уже в нижнем регистре и без пробелов по краям
    fn matches(&self, needle: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Регистронезависимое сравнение строк
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Фильтрует список по поисковому запросу (подстрока, без учёта регистра)
pub fn filter_by_search<T: Searchable>(items: Vec<T>, query: &str) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items.into_iter().filter(|item| item.matches(&needle)).collect()
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    count.div_ceil(size).max(1)
}

/// Номер страницы не выходит за последнюю
pub fn clamp_page(page: usize, count: usize, page_size: usize) -> usize {
    page.min(total_pages(count, page_size) - 1)
}

pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let size = page_size.max(1);
    let start = page.saturating_mul(size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + size).min(items.len());
    items[start..end].to_vec()
}

/// Дата записи (любой ISO-префикс "YYYY-MM-DD...") в интервале [from, to]; пустая граница открыта
pub fn in_date_range(date: &str, from: &str, to: &str) -> bool {
    let day = date.get(..10).unwrap_or(date);
    (from.is_empty() || day >= from) && (to.is_empty() || day <= to)
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Состояние страницы-списка
#[derive(Clone, Debug)]
pub struct ListState<T> {
    /// Текущая страница отфильтрованного набора
    pub items: Vec<T>,
    pub search_query: String,
    pub date_from: String,
    pub date_to: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl<T> ListState<T> {
    pub fn new(sort_field: &str, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            sort_field: sort_field.to_string(),
            sort_ascending: true,
            page: 0,
            page_size: page_size.max(1),
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

/// Контроллер списка: полный набор с backend + состояние окна просмотра.
///
/// `extra_filter` применяется после поиска (категории, статусы, даты).
pub struct ListController<T: Send + Sync + 'static> {
    pub all: RwSignal<Vec<T>>,
    pub state: RwSignal<ListState<T>>,
    extra_filter: StoredValue<Box<dyn Fn(&T, &ListState<T>) -> bool + Send + Sync>>,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: Searchable + Sortable + Clone + Send + Sync + 'static,
{
    pub fn new(sort_field: &str, page_size: usize) -> Self {
        Self::with_filter(sort_field, page_size, |_, _| true)
    }

    pub fn with_filter(
        sort_field: &str,
        page_size: usize,
        filter: impl Fn(&T, &ListState<T>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            all: RwSignal::new(Vec::new()),
            state: RwSignal::new(ListState::new(sort_field, page_size)),
            extra_filter: StoredValue::new(Box::new(filter)),
        }
    }

    /// Пересчитывает видимое окно из полного набора
    pub fn refresh_view(&self) {
        let all = self.all.get_untracked();
        let state = self.state;
        let extra = self.extra_filter;
        state.update(|s| {
            let mut data = filter_by_search(all, &s.search_query);
            extra.with_value(|f| data.retain(|item| f(item, s)));
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
            s.total_count = data.len();
            s.total_pages = total_pages(data.len(), s.page_size);
            s.page = clamp_page(s.page, data.len(), s.page_size);
            s.items = page_slice(&data, s.page, s.page_size);
        });
    }

    pub fn set_data(&self, data: Vec<T>) {
        self.all.set(data);
        self.state.update(|s| s.is_loaded = true);
        self.refresh_view();
    }

    /// Локальное изменение одной записи (оптимистичные переключатели)
    pub fn update_where(&self, pred: impl Fn(&T) -> bool, f: impl Fn(&mut T)) {
        self.all.update(|items| {
            for item in items.iter_mut().filter(|i| pred(i)) {
                f(item);
            }
        });
        self.refresh_view();
    }

    /// Все отфильтрованные и отсортированные записи (для экспорта и итогов)
    pub fn filtered(&self) -> Vec<T> {
        let all = self.all.get_untracked();
        let extra = self.extra_filter;
        self.state.with_untracked(|s| {
            let mut data = filter_by_search(all, &s.search_query);
            extra.with_value(|f| data.retain(|item| f(item, s)));
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
            data
        })
    }

    pub fn set_search(&self, query: String) {
        self.state.update(|s| {
            s.search_query = query;
            s.page = 0;
        });
        self.refresh_view();
    }

    pub fn set_date_range(&self, from: String, to: String) {
        self.state.update(|s| {
            s.date_from = from;
            s.date_to = to;
            s.page = 0;
        });
        self.refresh_view();
    }

    pub fn toggle_sort(&self, field: &str) {
        self.state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
        });
        self.refresh_view();
    }

    pub fn go_to_page(&self, page: usize) {
        self.state.update(|s| s.page = page);
        self.refresh_view();
    }

    pub fn change_page_size(&self, size: usize) {
        self.state.update(|s| {
            s.page_size = size.max(1);
            s.page = 0;
        });
        self.refresh_view();
    }

    pub fn sort_indicator(&self, field: &'static str) -> impl Fn() -> &'static str + Copy + Send + Sync {
        let state = self.state;
        move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        qty: i32,
    }

    impl Searchable for Row {
        fn matches(&self, needle: &str) -> bool {
            contains_ci(self.name, needle)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.qty.cmp(&other.qty),
                _ => cmp_text(self.name, other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Leche", qty: 3 },
            Row { name: "azúcar", qty: 1 },
            Row { name: "Lejía", qty: 2 },
        ]
    }

    #[test]
    fn test_filter_case_insensitive() {
        let found = filter_by_search(rows(), "  LE ");
        assert_eq!(found.len(), 2);
        assert_eq!(filter_by_search(rows(), "").len(), 3);
    }

    #[test]
    fn test_sort_both_directions() {
        let mut data = rows();
        sort_list(&mut data, "qty", true);
        assert_eq!(data[0].qty, 1);
        sort_list(&mut data, "name", false);
        assert_eq!(data[0].name, "Lejía");
        assert_eq!(data[2].name, "azúcar");
    }

    #[test]
    fn test_paging() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(3, 0), 3);
        let data: Vec<i32> = (1..=25).collect();
        assert_eq!(page_slice(&data, 2, 10), vec![21, 22, 23, 24, 25]);
        assert!(page_slice(&data, 3, 10).is_empty());
        assert!(page_slice::<i32>(&[], 0, 10).is_empty());
    }

    #[test]
    fn test_clamp_page_when_set_shrinks() {
        assert_eq!(clamp_page(4, 25, 10), 2);
        assert_eq!(clamp_page(1, 0, 10), 0);
        assert_eq!(clamp_page(1, 15, 10), 1);
    }

    #[test]
    fn test_in_date_range_inclusive() {
        assert!(in_date_range("2024-05-01T10:00:00", "2024-05-01", "2024-05-01"));
        assert!(in_date_range("2024-05-10", "", "2024-05-31"));
        assert!(!in_date_range("2024-06-01", "2024-05-01", "2024-05-31"));
        assert!(!in_date_range("2024-04-30", "2024-05-01", ""));
        assert!(in_date_range("2024-04-30", "", ""));
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("qty", "name", true), " ⇅");
    }
}
