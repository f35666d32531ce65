use saber_common::catalog::{BrowseView, Catalog, ModelFilter};
use saber_common::model::category::Subcategory;
use saber_common::model::template::TemplateModel;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::helpers::format_count;

pub enum Msg {
    SelectCategory(String),
    SelectSubcategory(String),
    Back,
    SetCourse(Option<String>),
    SetLevel(Option<String>),
}

/// Three-level model browser: categories, subcategories, models.
pub struct CatalogPage {
    view: BrowseView,
    filter: ModelFilter,
}

fn selected(e: Event) -> Option<String> {
    let value = e.target_unchecked_into::<HtmlSelectElement>().value();
    (!value.is_empty()).then_some(value)
}

impl Component for CatalogPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            view: BrowseView::default(),
            filter: ModelFilter::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectCategory(id) => self.view = self.view.select_category(&id),
            Msg::SelectSubcategory(id) => {
                self.view = self.view.select_subcategory(&id);
                self.filter = ModelFilter::default();
            }
            Msg::Back => self.view = self.view.back(),
            Msg::SetCourse(course) => self.filter.course = course,
            Msg::SetLevel(level) => self.filter.level = level,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let catalog = Catalog::builtin();
        let link = ctx.link();
        let (title, description, body) = match &self.view {
            BrowseView::Categories => (
                "Biblioteca de Modelos".to_string(),
                "Escolha a categoria de documento que precisa criar".to_string(),
                self.categories_view(ctx, catalog),
            ),
            BrowseView::Subcategories { category_id } => {
                let category = catalog.category(category_id);
                (
                    category.map(|c| c.name.clone()).unwrap_or_default(),
                    category.map(|c| c.description.clone()).unwrap_or_default(),
                    self.subcategories_view(ctx, catalog.subcategories(category_id)),
                )
            }
            BrowseView::Models { subcategory_id, .. } => {
                let subcategory = catalog.subcategory(subcategory_id);
                (
                    subcategory.map(|s| s.name.clone()).unwrap_or_default(),
                    subcategory.map(|s| s.description.clone()).unwrap_or_default(),
                    self.models_view(ctx, catalog, subcategory_id, subcategory),
                )
            }
        };

        html! {
            <div class="catalog">
                <section class="hero">
                    if self.view.can_go_back() {
                        <button class="btn ghost" onclick={link.callback(|_| Msg::Back)}>
                            <i class="material-icons">{ "arrow_back" }</i>
                            { "Voltar" }
                        </button>
                    }
                    <h1>{ title }</h1>
                    <p class="muted">{ description }</p>
                </section>
                { body }
            </div>
        }
    }
}

impl CatalogPage {
    fn categories_view(&self, ctx: &Context<Self>, catalog: &Catalog) -> Html {
        html! {
            <div class="card-grid">
                { for catalog.categories().iter().map(|category| {
                    let id = category.id.clone();
                    html! {
                        <div class="card clickable" key={category.id.clone()}
                            onclick={ctx.link().callback(move |_| Msg::SelectCategory(id.clone()))}>
                            <i class="material-icons">{ category.icon.clone() }</i>
                            <h3>{ category.name.clone() }</h3>
                            <p class="muted">{ category.description.clone() }</p>
                            <span class="badge">{ format!("{}+ modelos", category.advertised_count) }</span>
                        </div>
                    }
                }) }
            </div>
        }
    }

    fn subcategories_view(&self, ctx: &Context<Self>, subcategories: &[Subcategory]) -> Html {
        html! {
            <div class="card-grid">
                { for subcategories.iter().map(|sub| {
                    let id = sub.id.clone();
                    html! {
                        <div class="card clickable" key={sub.id.clone()}
                            onclick={ctx.link().callback(move |_| Msg::SelectSubcategory(id.clone()))}>
                            <h3>{ sub.name.clone() }</h3>
                            <p class="muted">{ sub.description.clone() }</p>
                            <div class="badges">
                                { for sub.preview_badges().into_iter().map(|b| html! {
                                    <span class="badge outline">{ b.to_string() }</span>
                                }) }
                            </div>
                        </div>
                    }
                }) }
            </div>
        }
    }

    fn models_view(
        &self,
        ctx: &Context<Self>,
        catalog: &Catalog,
        subcategory_id: &str,
        subcategory: Option<&Subcategory>,
    ) -> Html {
        let link = ctx.link();
        let models = catalog.filter_models(subcategory_id, &self.filter);
        let courses = subcategory.map(|s| s.courses.as_slice()).unwrap_or_default();
        let levels = subcategory.map(|s| s.levels.as_slice()).unwrap_or_default();

        html! {
            <>
                <div class="filters">
                    if !courses.is_empty() {
                        { facet_select("Curso", courses, self.filter.course.as_deref(), link.callback(|e| Msg::SetCourse(selected(e)))) }
                    }
                    if !levels.is_empty() {
                        { facet_select("Nível", levels, self.filter.level.as_deref(), link.callback(|e| Msg::SetLevel(selected(e)))) }
                    }
                </div>
                if models.is_empty() {
                    <div class="empty-state">
                        <i class="material-icons">{ "description" }</i>
                        <h3>{ "Nenhum modelo encontrado" }</h3>
                        <p class="muted">{ "Tente ajustar os filtros ou escolher uma categoria diferente." }</p>
                    </div>
                } else {
                    <div class="card-grid">
                        { for models.into_iter().map(model_card) }
                    </div>
                }
            </>
        }
    }
}

fn facet_select(placeholder: &str, options: &[String], current: Option<&str>, onchange: Callback<Event>) -> Html {
    html! {
        <select class="facet" {onchange}>
            <option value="" selected={current.is_none()}>{ placeholder.to_string() }</option>
            { for options.iter().map(|option| html! {
                <option value={option.clone()} selected={current == Some(option.as_str())}>
                    { option.clone() }
                </option>
            }) }
        </select>
    }
}

fn model_card(model: &TemplateModel) -> Html {
    html! {
        <div class="card model" key={model.id.clone()}>
            <img src={model.preview.clone()} alt={model.title.clone()} />
            <h3>{ model.title.clone() }</h3>
            <p class="muted">{ model.description.clone() }</p>
            if let Some(badge) = model.badge() {
                <span class="badge secondary">{ badge.to_string() }</span>
            }
            <div class="model-meta">
                <span><i class="material-icons">{ "download" }</i>{ format_count(model.downloads) }</span>
                <span><i class="material-icons">{ "star" }</i>{ format!("{:.1}", model.rating) }</span>
            </div>
            <a class="btn" href={model.form_href()}>{ "Selecionar" }</a>
        </div>
    }
}
