//! Conversions between the JSON budget types and the engine's.

use api_types::budget::{Item, Section};

pub fn map_item(item: engine::Item) -> Item {
    Item {
        id: item.id,
        item_name: item.name,
        item_value: item.value,
        cols: item.cols,
        rows: item.rows,
        color: item.color,
    }
}

pub fn map_section(section: engine::Section) -> Section {
    Section {
        id: section.id,
        title: section.title,
        items: section.items.into_iter().map(map_item).collect(),
    }
}

pub fn map_sections(sections: Vec<engine::Section>) -> Vec<Section> {
    sections.into_iter().map(map_section).collect()
}

pub fn item_input(item: Item) -> engine::Item {
    engine::Item {
        id: item.id,
        name: item.item_name,
        value: item.item_value,
        cols: item.cols,
        rows: item.rows,
        color: item.color,
    }
}

pub fn section_input(section: Section) -> engine::Section {
    engine::Section {
        id: section.id,
        title: section.title,
        items: section.items.into_iter().map(item_input).collect(),
    }
}
