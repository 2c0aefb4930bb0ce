use contracts::dashboards::d401_low_stock::{low_stock_rows, LowStockRow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a009_presentation::api::fetch_presentations;
use crate::shared::components::ErrorAlert;
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::number_format::format_quantity;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_REPORT};
use crate::shared::toast::use_toast;

impl CsvExportable for LowStockRow {
    fn headers() -> Vec<&'static str> {
        vec!["Presentación", "Stock", "Stock mínimo", "Faltante"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format_quantity(self.stock),
            format_quantity(self.min_stock),
            format_quantity(self.shortage),
        ]
    }
}

#[component]
pub fn LowStockReport() -> impl IntoView {
    let toast = use_toast();
    let rows = RwSignal::new(Vec::<LowStockRow>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match fetch_presentations().await {
                Ok(list) => rows.set(low_stock_rows(&list)),
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    };
    load();

    view! {
        <PageFrame page_id="low_stock--report" category=PAGE_CAT_REPORT>
            <PageHeader title="Stock bajo" count=Signal::derive(move || rows.with(Vec::len))>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        if let Err(e) = rows.with_untracked(|r| export_csv(r, "stock_bajo.csv")) {
                            toast.error(e);
                        }
                    }
                >
                    {icon("download")}
                    " CSV"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                    {icon("refresh")}
                    " Actualizar"
                </Button>
            </PageHeader>
            <div class="page__content">
                <ErrorAlert error=error />
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Presentación"</TableHeaderCell>
                            <TableHeaderCell>"Stock"</TableHeaderCell>
                            <TableHeaderCell>"Mínimo"</TableHeaderCell>
                            <TableHeaderCell>"Faltante"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || rows.get().into_iter().map(|r| view! {
                            <TableRow>
                                <TableCell>{r.name}</TableCell>
                                <TableCell><span class="stock stock--low">{format_quantity(r.stock)}</span></TableCell>
                                <TableCell>{format_quantity(r.min_stock)}</TableCell>
                                <TableCell>{format_quantity(r.shortage)}</TableCell>
                            </TableRow>
                        }).collect_view()}
                    </TableBody>
                </Table>
                <Show when=move || !loading.get() && rows.with(Vec::is_empty)>
                    <div class="report__empty">"Todas las presentaciones tienen stock suficiente"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
