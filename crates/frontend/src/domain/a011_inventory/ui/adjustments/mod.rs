use contracts::domain::a009_presentation::Presentation;
use contracts::domain::a011_inventory::{AdjustmentDto, AdjustmentKind, InventoryMovement};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a009_presentation::api::fetch_presentations;
use crate::domain::a009_presentation::ui::picker::PresentationPicker;
use crate::domain::a011_inventory::api;
use crate::shared::components::{bind, ErrorAlert, FieldBinding, FormNumber, FormSelect, FormText, ListToolbar, SortableHeader};
use crate::shared::config::use_config;
use crate::shared::crud_page::text_cell;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, contains_ci, in_date_range, ListController, Searchable, Sortable};
use crate::shared::number_format::{format_money, format_quantity};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_FORM};
use crate::shared::toast::use_toast;

impl Searchable for InventoryMovement {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.presentation_name, needle)
            || contains_ci(&self.reason, needle)
            || contains_ci(&self.user_name, needle)
    }
}

impl Sortable for InventoryMovement {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "presentation" => cmp_text(&self.presentation_name, &other.presentation_name),
            "quantity" => self.quantity.total_cmp(&other.quantity),
            _ => self.created_at.cmp(&other.created_at),
        }
    }
}

pub fn kind_code(kind: AdjustmentKind) -> String {
    match kind {
        AdjustmentKind::Entry => "ENTRY".into(),
        AdjustmentKind::Exit => "EXIT".into(),
    }
}

pub fn kind_from_code(code: &str) -> AdjustmentKind {
    if code == "EXIT" {
        AdjustmentKind::Exit
    } else {
        AdjustmentKind::Entry
    }
}

/// Для расхода себестоимость не отправляется: backend берёт среднюю
pub fn prepared(mut dto: AdjustmentDto, presentation_id: i64) -> AdjustmentDto {
    dto.presentation_id = Some(presentation_id);
    dto.reason = dto.reason.trim().to_string();
    if dto.kind == AdjustmentKind::Exit {
        dto.unit_cost = None;
    }
    dto
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let cfg = use_config();
    let toast = use_toast();
    let presentations = RwSignal::new(Vec::<Presentation>::new());
    let selected = RwSignal::new(Option::<Presentation>::None);
    let form = RwSignal::new(AdjustmentDto::default());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let history = ListController::<InventoryMovement>::with_filter("date", cfg.ui.page_size, |m, st| {
        in_date_range(&m.created_at, &st.date_from, &st.date_to)
    });
    history.state.update(|s| s.sort_ascending = false);

    let load = move || {
        spawn_local(async move {
            match fetch_presentations().await {
                Ok(list) => presentations.set(list.into_iter().filter(|p| p.active).collect()),
                Err(e) => error.set(Some(e.user_message())),
            }
            match api::fetch_movements().await {
                Ok(list) => history.set_data(list),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };
    load();

    let kind_field = FieldBinding {
        value: Signal::derive(move || form.with(|f| kind_code(f.kind))),
        set: Callback::new(move |code: String| form.update(|f| f.kind = kind_from_code(&code))),
    };
    let kind_options = Signal::derive(|| {
        vec![
            ("ENTRY".to_string(), AdjustmentKind::Entry.label().to_string()),
            ("EXIT".to_string(), AdjustmentKind::Exit.label().to_string()),
        ]
    });
    let is_exit = Signal::derive(move || form.with(|f| f.kind == AdjustmentKind::Exit));

    let submit = move |_: leptos::ev::MouseEvent| {
        let Some(p) = selected.get_untracked() else {
            error.set(Some("Seleccione una presentación".into()));
            return;
        };
        let dto = prepared(form.get_untracked(), p.id);
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match api::post_adjustment(&dto, p.stock).await {
                Ok(()) => {
                    log::info!("adjustment {:?} {} x{}", dto.kind, p.id, dto.quantity);
                    toast.success("Ajuste registrado");
                    form.set(AdjustmentDto::default());
                    selected.set(None);
                    load();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            saving.set(false);
        });
    };

    let state = history.state;

    view! {
        <PageFrame page_id="inventory--form" category=PAGE_CAT_FORM>
            <PageHeader title="Ajustes de inventario" />
            <div class="page__content">
                <div class="card">
                    <h3 class="card__title">"Nuevo ajuste"</h3>
                    <ErrorAlert error=error />
                    <PresentationPicker items=presentations on_pick=Callback::new(move |p| selected.set(Some(p))) />
                    {move || selected.get().map(|p| view! {
                        <div class="picker__selected">
                            <b>{p.full_name()}</b>
                            " · stock actual: "
                            {format_quantity(p.stock)}
                        </div>
                    })}
                    <div class="form__row">
                        <FormSelect label="Tipo" field=kind_field options=kind_options />
                        <FormNumber label="Cantidad" field=bind(form, |f| f.quantity, |f, v| f.quantity = v) />
                        <FormNumber
                            label="Costo unitario"
                            disabled=is_exit
                            field=bind(form, |f| f.unit_cost.unwrap_or(0.0), |f, v| f.unit_cost = Some(v))
                        />
                    </div>
                    <FormText label="Motivo" maxlength=200 field=bind(form, |f| f.reason.clone(), |f, v| f.reason = v) />
                    <Button appearance=ButtonAppearance::Primary on_click=submit disabled=saving>
                        {icon("save")}
                        " Registrar ajuste"
                    </Button>
                </div>

                <h3>"Movimientos"</h3>
                <ListToolbar controller=history placeholder="Presentación, motivo o usuario..." with_dates=true />
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeader controller=history field="date" label="Fecha" />
                                <SortableHeader controller=history field="presentation" label="Presentación" />
                                <TableHeaderCell>"Tipo"</TableHeaderCell>
                                <SortableHeader controller=history field="quantity" label="Cantidad" />
                                <TableHeaderCell>"Costo unit."</TableHeaderCell>
                                <TableHeaderCell>"Motivo"</TableHeaderCell>
                                <TableHeaderCell>"Usuario"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || state.with(|s| s.items.clone()).into_iter().map(|m| view! {
                                <TableRow>
                                    {text_cell(format_datetime(&m.created_at))}
                                    {text_cell(m.presentation_name.clone())}
                                    {text_cell(m.kind.label())}
                                    {text_cell(format_quantity(m.quantity))}
                                    {text_cell(m.unit_cost.map(format_money).unwrap_or_default())}
                                    {text_cell(m.reason.clone())}
                                    {text_cell(m.user_name.clone())}
                                </TableRow>
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepared_exit_drops_cost() {
        let dto = AdjustmentDto {
            kind: AdjustmentKind::Exit,
            quantity: 2.0,
            unit_cost: Some(4.0),
            reason: "  Merma  ".into(),
            ..Default::default()
        };
        let out = prepared(dto, 9);
        assert_eq!(out.presentation_id, Some(9));
        assert_eq!(out.unit_cost, None);
        assert_eq!(out.reason, "Merma");
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(kind_from_code(&kind_code(AdjustmentKind::Exit)), AdjustmentKind::Exit);
        assert_eq!(kind_from_code("x"), AdjustmentKind::Entry);
    }
}
