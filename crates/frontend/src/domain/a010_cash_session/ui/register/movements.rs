use contracts::domain::a010_cash_session::{CashSummary, Movement, MovementDto, MovementKind};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a010_cash_session::api;
use crate::shared::components::form_fields::parse_number;
use crate::shared::components::{ErrorAlert, MoneyCell};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

fn kind_from_code(code: &str) -> MovementKind {
    match code {
        "EXPENSE" => MovementKind::Expense,
        _ => MovementKind::Income,
    }
}

#[component]
pub fn MovementsPanel(
    session_id: EntityId,
    movements: RwSignal<Vec<Movement>>,
    summary: RwSignal<CashSummary>,
) -> impl IntoView {
    let toast = use_toast();
    let kind = RwSignal::new(String::from("INCOME"));
    let amount = RwSignal::new(String::new());
    let concept = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let add = move |_: leptos::ev::MouseEvent| {
        let dto = MovementDto {
            kind: kind_from_code(&kind.get_untracked()),
            amount: parse_number(&amount.get_untracked()),
            concept: concept.get_untracked().trim().to_string(),
        };
        let available = summary.with_untracked(CashSummary::expected_cash);
        busy.set(true);
        error.set(None);
        spawn_local(async move {
            let result = async {
                api::add_movement(session_id, &dto, available).await?;
                api::fetch_movements(session_id).await
            }
            .await;
            match result {
                Ok(list) => {
                    summary.update(|s| *s = s.clone().with_movements(&list));
                    movements.set(list);
                    amount.set(String::new());
                    concept.set(String::new());
                    toast.success(format!("{} registrado", dto.kind.label()));
                }
                Err(e) => {
                    log::warn!("movement rejected: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="card">
            <h3 class="card__title">"Movimientos de caja"</h3>
            <ErrorAlert error=error />
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div class="form__group">
                    <label class="form__label">"Tipo"</label>
                    <select class="form__select" on:change=move |ev| kind.set(event_target_value(&ev))>
                        <option value="INCOME" selected=move || kind.get() == "INCOME">"Ingreso"</option>
                        <option value="EXPENSE" selected=move || kind.get() == "EXPENSE">"Egreso"</option>
                    </select>
                </div>
                <div class="form__group" style="width: 140px;">
                    <label class="form__label">"Monto"</label>
                    <Input value=amount input_type=InputType::Number />
                </div>
                <div class="form__group" style="flex: 1;">
                    <label class="form__label">"Concepto"</label>
                    <Input value=concept placeholder="Pago de servicios, sencillo..." />
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=add disabled=busy>
                    {icon("plus")}
                    " Registrar"
                </Button>
            </Flex>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Fecha"</TableHeaderCell>
                        <TableHeaderCell>"Tipo"</TableHeaderCell>
                        <TableHeaderCell>"Concepto"</TableHeaderCell>
                        <TableHeaderCell>"Monto"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || movements.get().into_iter().map(|m| {
                        let color = match m.kind {
                            MovementKind::Income => BadgeColor::Success,
                            MovementKind::Expense => BadgeColor::Danger,
                        };
                        view! {
                            <TableRow>
                                <TableCell>{format_datetime(&m.created_at)}</TableCell>
                                <TableCell>
                                    <Badge appearance=BadgeAppearance::Tint color=color>{m.kind.label()}</Badge>
                                </TableCell>
                                <TableCell>{m.concept.clone()}</TableCell>
                                <MoneyCell value=m.amount />
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_code() {
        assert_eq!(kind_from_code("EXPENSE"), MovementKind::Expense);
        assert_eq!(kind_from_code("INCOME"), MovementKind::Income);
        assert_eq!(kind_from_code(""), MovementKind::Income);
    }
}
