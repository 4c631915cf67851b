//! Pie Chart Component
//!
//! Draws the store's entries on an HTML5 canvas with a legend.

use chartboard::chart::{pie_slices, PieSlice};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::GlobalState;

/// Slices below this share get no percentage label
const MIN_LABEL_FRACTION: f64 = 0.04;

/// Pie chart component
#[component]
pub fn PieChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let slices = create_memo(move |_| pie_slices(&state.dataset.get()));

    // Redraw whenever the dataset changes
    create_effect(move |_| {
        let slices = slices.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &slices);
        }
    });

    view! {
        <div class="flex flex-col md:flex-row items-center gap-8">
            <canvas
                node_ref=canvas_ref
                width="400"
                height="400"
                class="w-64 h-64 md:w-96 md:h-96"
            />

            <ul class="space-y-2">
                {move || {
                    slices.get()
                        .into_iter()
                        .map(|slice| view! {
                            <li class="flex items-center space-x-3">
                                <span
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", slice.color)
                                />
                                <span class="text-gray-200">{slice.label.clone()}</span>
                                <span class="text-gray-400 text-sm">
                                    {format!("{} ({:.1}%)", slice.value, slice.percent())}
                                </span>
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

/// Draw the pie on canvas
fn draw_pie(canvas: &HtmlCanvasElement, slices: &[PieSlice]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = cx.min(cy) - 10.0;

    ctx.clear_rect(0.0, 0.0, width, height);

    if slices.iter().all(|s| s.fraction == 0.0) {
        ctx.set_stroke_style(&"#4b5563".into()); // gray-600
        ctx.set_line_width(2.0);
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius, 0.0, std::f64::consts::TAU);
        ctx.stroke();

        ctx.set_fill_style(&"#6b7280".into()); // gray-500
        ctx.set_font("16px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("No data", cx, cy);
        return;
    }

    for slice in slices.iter().filter(|s| s.fraction > 0.0) {
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, slice.start_angle, slice.end_angle);
        ctx.close_path();

        ctx.set_fill_style(&slice.color.as_str().into());
        ctx.fill();

        ctx.set_stroke_style(&"#111827".into()); // gray-900
        ctx.set_line_width(2.0);
        ctx.stroke();
    }

    ctx.set_fill_style(&"#ffffff".into());
    ctx.set_font("bold 14px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    for slice in slices.iter().filter(|s| s.fraction >= MIN_LABEL_FRACTION) {
        let angle = slice.mid_angle();
        let x = cx + angle.cos() * radius * 0.65;
        let y = cy + angle.sin() * radius * 0.65;
        let _ = ctx.fill_text(&format!("{:.0}%", slice.percent()), x, y);
    }
}
