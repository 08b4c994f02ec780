use dioxus::prelude::*;

/// Pictogram shown next to a category label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Grid,
    Utensils,
    Bed,
    Sparkles,
    Dumbbell,
    Ticket,
    Stethoscope,
}

impl CategoryIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            CategoryIcon::Grid => "▦",
            CategoryIcon::Utensils => "🍽",
            CategoryIcon::Bed => "🛏",
            CategoryIcon::Sparkles => "✨",
            CategoryIcon::Dumbbell => "🏋",
            CategoryIcon::Ticket => "🎟",
            CategoryIcon::Stethoscope => "🩺",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: CategoryIcon,
}

/// Every category, in display order. "all" is the no-filter sentinel.
pub const CATEGORIES: [Category; 7] = [
    Category { id: "all", label: "Todos", icon: CategoryIcon::Grid },
    Category { id: "restaurant", label: "Restaurantes", icon: CategoryIcon::Utensils },
    Category { id: "hotel", label: "Hoteles", icon: CategoryIcon::Bed },
    Category { id: "spa", label: "Spa y Bienestar", icon: CategoryIcon::Sparkles },
    Category { id: "sports", label: "Deportes", icon: CategoryIcon::Dumbbell },
    Category { id: "events", label: "Eventos", icon: CategoryIcon::Ticket },
    Category { id: "health", label: "Salud", icon: CategoryIcon::Stethoscope },
];

pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}

pub fn is_active(selected_category: &str, category: &Category) -> bool {
    selected_category == category.id
}

#[derive(Props, PartialEq, Clone)]
pub struct CategoryFilterProps {
    #[props(into)]
    selected_category: String,
    on_category_change: EventHandler<String>,
}

#[component]
pub fn CategoryFilter(props: CategoryFilterProps) -> Element {
    let on_change = props.on_category_change;

    rsx! {
        div { class: "category-filter",
            {CATEGORIES.iter().map(|category| {
                let active = is_active(&props.selected_category, category);
                let id = category.id;
                let glyph = category.icon.glyph();
                let class = if active { "category-button active" } else { "category-button" };
                rsx! {
                    button {
                        key: "{id}",
                        r#type: "button",
                        class,
                        aria_pressed: "{active}",
                        onclick: move |_| on_change.call(id.to_string()),
                        span { class: "category-icon", "{glyph}" }
                        span { class: "category-label", "{category.label}" }
                    }
                }
            })}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    use dioxus::dioxus_core::{Mutation, NoOpMutations};
    use dioxus::html::{set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};

    type Calls = Rc<RefCell<Vec<String>>>;

    fn filter_page(calls: Calls) -> Element {
        let mut selected = use_signal(|| "all".to_string());

        rsx! {
            CategoryFilter {
                selected_category: selected(),
                on_category_change: move |id: String| {
                    calls.borrow_mut().push(id.clone());
                    selected.set(id);
                },
            }
        }
    }

    #[test]
    fn test_clicking_restaurantes_reports_its_id_once() {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let calls = Calls::default();
        let mut dom = VirtualDom::new_with_props(filter_page, calls.clone());
        let buttons: Vec<_> = dom
            .rebuild_to_vec()
            .edits
            .into_iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(id),
                _ => None,
            })
            .collect();
        assert_eq!(buttons.len(), CATEGORIES.len());

        let restaurantes = CATEGORIES.iter().position(|c| c.label == "Restaurantes").unwrap();
        let click = Rc::new(PlatformEventData::new(Box::new(SerializedMouseData::default())));
        dom.handle_event("click", click, buttons[restaurantes], true);
        dom.render_immediate(&mut NoOpMutations);

        assert_eq!(*calls.borrow(), vec!["restaurant".to_string()]);
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches("category-button active").count(), 1);
        let active = html.find("category-button active").unwrap();
        let active_button = &html[active..active + html[active..].find("</button>").unwrap()];
        assert!(active_button.contains("Restaurantes"));
    }

    fn app(selected: &'static str) -> Element {
        rsx! {
            CategoryFilter {
                selected_category: selected,
                on_category_change: |_| {},
            }
        }
    }

    fn render(selected: &'static str) -> String {
        let mut dom = VirtualDom::new_with_props(app, selected);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_restaurant_label() {
        let category = CATEGORIES.iter().find(|c| c.label == "Restaurantes").unwrap();
        assert_eq!(category.id, "restaurant");
        assert_eq!(find_category("restaurant"), Some(category));
        assert_eq!(find_category("pizza"), None);
    }

    #[test]
    fn test_exactly_one_active() {
        let html = render("restaurant");
        assert_eq!(html.matches("category-button active").count(), 1);
        assert_eq!(html.matches("<button").count(), CATEGORIES.len());
    }

    #[test]
    fn test_unknown_selection_has_no_active_button() {
        let html = render("cinema");
        assert_eq!(html.matches("category-button active").count(), 0);
    }

    #[test]
    fn test_declaration_order() {
        let html = render("all");
        let positions: Vec<usize> = CATEGORIES
            .iter()
            .map(|c| html.find(c.label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
