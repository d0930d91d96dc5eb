use crate::domain::apartment::find_apartment;
use crate::domain::calendar::month_grid;
use crate::domain::{AvailabilitySource, CalendarView, DayStatus};
use chrono::NaiveDate;
use maud::{html, Markup};

pub struct CalendarVm<'a> {
    pub view: CalendarView,
    pub today: NaiveDate,
    pub source: &'a dyn AvailabilitySource,
    pub booking_url: &'a str,
}

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Colour class for a day cell.
pub fn day_class(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Available | DayStatus::AllAvailable => "day-available",
        DayStatus::SomeAvailable => "day-partial",
        DayStatus::Booked | DayStatus::AllBooked => "day-booked",
        DayStatus::Pending => "day-pending",
        DayStatus::Past => "day-past",
        DayStatus::Mixed | DayStatus::Unknown => "day-neutral",
    }
}

/// The whole `#calendar` section. Also served alone as the htmx partial.
pub fn calendar_section(vm: &CalendarVm) -> Markup {
    let view = vm.view;
    let units = vm.source.unit_count();

    html! {
        section class="section section-muted" id="calendar" {
            div class="container narrow" {
                div class="section-head" {
                    h2 { "Check Availability" }
                    p class="muted" { "Select dates to see availability across all apartments" }
                }

                div class="calendar-toolbar" {
                    div class="unit-filter" {
                        @for unit in 0..=units {
                            @let class = if view.unit_filter() == unit { "btn btn-small active" } else { "btn btn-small btn-outline" };
                            @let label = if unit == 0 { "All".to_string() } else { format!("Apt {unit}") };
                            (view_link(view.select_unit(unit), class, &label))
                        }
                    }

                    div class="month-nav" {
                        @if view.can_go_back(vm.today) {
                            (view_link(view.prev_month(vm.today), "btn btn-ghost", "‹"))
                        } @else {
                            span class="btn btn-ghost disabled" aria-disabled="true" { "‹" }
                        }
                        span class="month-label" { (view.month().format("%B %Y").to_string()) }
                        (view_link(view.next_month(), "btn btn-ghost", "›"))
                    }
                }

                table class="calendar-grid" {
                    thead {
                        tr {
                            @for name in WEEKDAYS {
                                th { (name) }
                            }
                        }
                    }
                    tbody {
                        @for week in month_grid(view.month()) {
                            tr {
                                @for cell in week {
                                    td {
                                        @if let Some(date) = cell {
                                            (day_cell(vm, date))
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                (legend())

                @if let Some(date) = view.selected() {
                    (selected_panel(vm, date))
                }

                form class="refresh" method="post" action="/availability/refresh" {
                    button type="submit" class="btn btn-ghost btn-small" { "↻ Refresh demo data" }
                }
            }
        }
    }
}

/// A link that moves the calendar to `view`, swapped in place when htmx is loaded.
fn view_link(view: CalendarView, class: &str, label: &str) -> Markup {
    let q = view.to_query();

    html! {
        a
            class=(class)
            href=(format!("/?{q}#calendar"))
            hx-get=(format!("/calendar?{q}"))
            hx-target="#calendar"
            hx-swap="outerHTML"
            hx-push-url=(format!("/?{q}"))
        { (label) }
    }
}

fn day_cell(vm: &CalendarVm, date: NaiveDate) -> Markup {
    let status = vm.source.status(date, vm.view.unit(), vm.today);
    let mut class = format!("day {}", day_class(status));
    if vm.view.selected() == Some(date) {
        class.push_str(" selected");
    }
    if date == vm.today {
        class.push_str(" today");
    }
    let q = vm.view.select_date(date).to_query();

    html! {
        a
            class=(class)
            data-status=(status.as_str())
            title=(status.label())
            href=(format!("/?{q}#calendar"))
            hx-get=(format!("/calendar?{q}"))
            hx-target="#calendar"
            hx-swap="outerHTML"
            hx-push-url=(format!("/?{q}"))
        { (date.format("%-d").to_string()) }
    }
}

fn legend() -> Markup {
    html! {
        div class="legend" {
            span { i class="swatch day-available" {} "Available" }
            span { i class="swatch day-partial" {} "Partially Available" }
            span { i class="swatch day-booked" {} "Booked" }
            span { i class="swatch day-pending" {} "Pending" }
            details class="calendar-info" {
                summary aria-label="About this calendar" { "ⓘ" }
                div class="popover" {
                    p { strong { "About This Calendar" } }
                    p class="muted" {
                        "This calendar shows the availability of our apartments. "
                        "Bookings themselves are handled by our booking partner."
                    }
                    p class="muted" {
                        "Click on a date to see detailed availability information for each apartment."
                    }
                }
            }
        }
    }
}

fn selected_panel(vm: &CalendarVm, date: NaiveDate) -> Markup {
    html! {
        div class="card selected-day" {
            h3 { "Availability for " (date.format("%B %-d, %Y").to_string()) }

            ul class="unit-statuses" {
                @for (unit, status) in vm.source.unit_statuses(date, vm.today) {
                    li {
                        span class="unit-name" {
                            @match find_apartment(unit) {
                                Some(apartment) => (apartment.name),
                                None => { "Apartment " (unit) }
                            }
                        }
                        span class=(format!("badge badge-{}", status.as_str())) { (status.label()) }
                    }
                }
            }

            a class="btn btn-block" href=(vm.booking_url) target="_blank" rel="noopener noreferrer" {
                "Book on Airbnb"
            }
        }
    }
}
