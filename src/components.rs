//! Yew components for the page sections: navigation shell, project
//! carousel, offer countdown, testimonials, portfolio grid, scroll-reveal
//! wrapper and the contact form.

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Node, Request, RequestInit,
    RequestMode, Response,
};
use yew::prelude::*;

use estudio_web::contact::{ContactError, ContactMessage, RELAY};
use estudio_web::defaults::{ANIMATION_LOCK_MS, OFFER_INTERVAL_MS, TICK_MS};
use estudio_web::{countdown_tick, format_two_digits, Carousel, Slot, TimeParts};

use crate::config::{
    NAVBAR_FRAGMENT_URL, NAV_HIDE_OFFSET, NAV_SHADOW_OFFSET, REVEAL_MARGIN,
};
use crate::storage;
use crate::swiper;
use crate::utils::{alert, scroll_top, ListenerHandle};

// ──────────────────────────────────────────────────────────────────────────────
// Navigation shell

async fn fetch_fragment(url: &str) -> Result<String, JsValue> {
    let response: Response = JsFuture::from(gloo_utils::window().fetch_with_str(url))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "fragment request failed: HTTP {}",
            response.status()
        )));
    }
    let text = JsFuture::from(response.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}

/// Fixed top navigation. The link content is a shared fragment fetched at
/// mount; until it arrives (or if it never does) the bar renders with the
/// offer banner only.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let fragment = use_state(|| None::<AttrValue>);
    let menu_open = use_state_eq(|| false);
    let elevated = use_state_eq(|| scroll_top() > NAV_SHADOW_OFFSET);
    let hidden = use_state_eq(|| false);
    let last_scroll = use_mut_ref(|| 0.0f64);
    let menu_ref = use_node_ref();
    let button_ref = use_node_ref();

    // load the shared fragment once, then re-scan for icon placeholders
    {
        let fragment = fragment.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_fragment(NAVBAR_FRAGMENT_URL).await {
                    Ok(html) => {
                        fragment.set(Some(AttrValue::from(html)));
                        swiper::refresh_icons();
                    }
                    Err(err) => log::error!("navigation fragment failed to load: {:?}", err),
                }
            });
        });
    }

    // shadow past 50px; hide when scrolling down past 100px, show on the
    // way back up
    {
        let elevated = elevated.clone();
        let hidden = hidden.clone();
        let last_scroll = last_scroll.clone();
        use_effect_with((), move |_| {
            let listener = ListenerHandle::on_window("scroll", move |_| {
                let offset = scroll_top();
                elevated.set(offset > NAV_SHADOW_OFFSET);
                let mut last = last_scroll.borrow_mut();
                hidden.set(offset > *last && offset > NAV_HIDE_OFFSET);
                *last = offset.max(0.0);
            });
            move || drop(listener)
        });
    }

    // dismiss the open menu on any click outside it and its toggle
    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let button_ref = button_ref.clone();
        use_effect_with(*menu_open, move |&open| {
            let listener = open.then(|| {
                ListenerHandle::on_document("click", move |event| {
                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside_menu = menu_ref
                        .get()
                        .is_some_and(|menu| menu.contains(target.as_ref()));
                    let on_button = button_ref
                        .get()
                        .is_some_and(|button| button.contains(target.as_ref()));
                    if !inside_menu && !on_button {
                        menu_open.set(false);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = fragment
        .as_ref()
        .map(|html| Html::from_html_unchecked(html.clone()))
        .unwrap_or_default();

    html! {
        <nav
            id="navbar"
            class={classes!(
                "navbar",
                (*elevated).then_some("shadow-lg"),
                (*hidden).then_some("hidden-nav"),
            )}
        >
            <div class="navbar-banner">
                <span class="navbar-banner-text">{ "Oferta de lanzamiento termina en" }</span>
                <OfferCountdown />
            </div>
            <div class="navbar-row">
                { links.clone() }
                <button ref={button_ref} class="mobile-menu-btn" onclick={toggle_menu}>
                    <i data-lucide="menu"></i>
                </button>
            </div>
            <div
                id="mobile-menu"
                ref={menu_ref}
                class={classes!("mobile-menu", (*menu_open).then_some("active"))}
            >
                { links }
            </div>
        </nav>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Offer countdown

/// One visual countdown bound to the shared persisted deadline. Several
/// instances can be mounted at once; each runs its own one-second ticker
/// but they all read and renew the same storage slot.
#[function_component(OfferCountdown)]
pub fn offer_countdown() -> Html {
    let parts = use_state_eq(|| None::<TimeParts>);
    let ticker = use_mut_ref(|| None::<Interval>);

    {
        let parts = parts.clone();
        let ticker = ticker.clone();
        use_effect_with((), move |_| {
            let tick = move || {
                let now = js_sys::Date::now() as i64;
                let (state, remaining) =
                    countdown_tick(storage::stored_deadline(), now, OFFER_INTERVAL_MS);
                if state.renewed {
                    storage::store_deadline(state.deadline_ms);
                }
                parts.set(Some(remaining));
            };
            tick();
            // replacing the handle drops, and thereby cancels, any prior ticker
            *ticker.borrow_mut() = Some(Interval::new(TICK_MS, tick));
            move || {
                ticker.borrow_mut().take();
            }
        });
    }

    let Some(parts) = *parts else {
        return html! {};
    };

    html! {
        <span class="countdown">
            <span class="timer-hours">{ format_two_digits(parts.hours) }</span>
            { ":" }
            <span class="timer-minutes">{ format_two_digits(parts.minutes) }</span>
            { ":" }
            <span class="timer-seconds">{ format_two_digits(parts.seconds) }</span>
        </span>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Hero

#[function_component(Hero)]
pub fn hero() -> Html {
    let hovered = use_state_eq(|| false);

    let onmouseover = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseout = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let image_style = if *hovered {
        "opacity: 1; transform: scale(1.05)"
    } else {
        "opacity: 0.8; transform: scale(1)"
    };

    html! {
        <header class="hero">
            <div class="hero-copy">
                <h1>{ "Diseño y desarrollo web a medida" }</h1>
                <p>{ "Sitios rápidos, claros y pensados para vender." }</p>
                <div class="hero-offer">
                    <span>{ "La oferta vence en" }</span>
                    <OfferCountdown />
                </div>
                <a class="btn-primary" href="#contacto">{ "Cotiza tu proyecto" }</a>
            </div>
            <div class="image-container">
                <img
                    src="img/hero.jpg"
                    alt="Escritorio de trabajo"
                    style={image_style}
                    {onmouseover}
                    {onmouseout}
                />
            </div>
        </header>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Project carousel

/// A project card in the showcase carousel.
#[derive(Clone, PartialEq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub blurb: &'static str,
    pub image: &'static str,
}

pub const PROJECT_CARDS: &[ProjectCard] = &[
    ProjectCard {
        title: "Pastelería Dulce Norte",
        blurb: "Catálogo con pedidos por WhatsApp",
        image: "img/proyecto-dulce-norte.jpg",
    },
    ProjectCard {
        title: "Estudio Jurídico Vega",
        blurb: "Sitio corporativo y agenda de citas",
        image: "img/proyecto-vega.jpg",
    },
    ProjectCard {
        title: "Gimnasio Fuerza Andina",
        blurb: "Landing de membresías",
        image: "img/proyecto-fuerza-andina.jpg",
    },
    ProjectCard {
        title: "Ferretería El Tornillo",
        blurb: "Tienda online con inventario",
        image: "img/proyecto-el-tornillo.jpg",
    },
    ProjectCard {
        title: "Clínica Dental Sonría",
        blurb: "Reservas y blog de consejos",
        image: "img/proyecto-sonria.jpg",
    },
];

#[derive(Properties, PartialEq)]
pub struct ProjectCarouselProps {
    pub cards: Vec<ProjectCard>,
}

/// Rotating project showcase: five positional slots around the center
/// card, arrows for relative steps, dots and the cards themselves for
/// absolute jumps. Transitions hold an 800ms lock; while it runs every
/// further activation is ignored without restarting the lock.
#[function_component(ProjectCarousel)]
pub fn project_carousel(props: &ProjectCarouselProps) -> Html {
    let len = props.cards.len();
    let engine = use_mut_ref(|| Carousel::new(len));
    let slots = use_state(|| Carousel::new(len).slots());
    let active = use_state_eq(|| 0usize);
    let lock = use_mut_ref(|| None::<Timeout>);

    let set_active = {
        let engine = engine.clone();
        let slots = slots.clone();
        let active = active.clone();
        let lock = lock.clone();
        Callback::from(move |target: isize| {
            let assignment = engine.borrow_mut().set_active(target);
            // None: empty deck or lock held; the running lock stays untouched
            let Some(assignment) = assignment else { return };
            slots.set(assignment);
            active.set(engine.borrow().current());
            let engine = engine.clone();
            *lock.borrow_mut() = Some(Timeout::new(ANIMATION_LOCK_MS, move || {
                engine.borrow_mut().release();
            }));
        })
    };

    // initial placement, also engaging the first lock window
    {
        let set_active = set_active.clone();
        use_effect_with((), move |_| set_active.emit(0));
    }

    if len == 0 {
        return html! {};
    }

    let on_left = {
        let engine = engine.clone();
        let set_active = set_active.clone();
        Callback::from(move |_: MouseEvent| {
            let current = engine.borrow().current() as isize;
            set_active.emit(current - 1);
        })
    };
    let on_right = {
        let engine = engine.clone();
        let set_active = set_active.clone();
        Callback::from(move |_: MouseEvent| {
            let current = engine.borrow().current() as isize;
            set_active.emit(current + 1);
        })
    };

    html! {
        <section id="proyectos" class="carousel-section">
            <h2>{ "Proyectos recientes" }</h2>
            <div class="carousel">
                <button class="nav-arrow left" onclick={on_left}>
                    <i data-lucide="chevron-left"></i>
                </button>
                <div class="carousel-track">
                    { for props.cards.iter().enumerate().map(|(i, card)| {
                        let slot = slots.get(i).copied().unwrap_or(Slot::Hidden);
                        let onclick = {
                            let set_active = set_active.clone();
                            Callback::from(move |_: MouseEvent| set_active.emit(i as isize))
                        };
                        html! {
                            <div class={classes!("card", slot.class_name())} {onclick}>
                                <img src={card.image} alt={card.title} />
                                <h3>{ card.title }</h3>
                                <p>{ card.blurb }</p>
                            </div>
                        }
                    }) }
                </div>
                <button class="nav-arrow right" onclick={on_right}>
                    <i data-lucide="chevron-right"></i>
                </button>
            </div>
            <div class="carousel-dots">
                { for (0..len).map(|i| {
                    let onclick = {
                        let set_active = set_active.clone();
                        Callback::from(move |_: MouseEvent| set_active.emit(i as isize))
                    };
                    html! {
                        <button
                            class={classes!("dot", (i == *active).then_some("active"))}
                            {onclick}
                        />
                    }
                }) }
            </div>
        </section>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Testimonials

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "La tienda quedó lista en dos semanas y las ventas por el catálogo no paran.",
        author: "María Quispe",
        role: "Pastelería Dulce Norte",
    },
    Testimonial {
        quote: "Entendieron el estudio desde la primera reunión. El sitio transmite seriedad.",
        author: "Jorge Vega",
        role: "Estudio Jurídico Vega",
    },
    Testimonial {
        quote: "Las reservas en línea nos ahorran horas de teléfono cada semana.",
        author: "Lucía Paredes",
        role: "Clínica Dental Sonría",
    },
];

/// Thin shell around the third-party slider: the markup renders here, the
/// behavior is configured once on mount through the interop binding.
#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    use_effect_with((), |_| {
        swiper::init_testimonial_slider(&swiper::SliderConfig::default());
    });

    html! {
        <section class="testimonials">
            <h2>{ "Lo que dicen los clientes" }</h2>
            <div class="swiper mySwiper">
                <div class="swiper-wrapper">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div class="swiper-slide">
                            <blockquote>{ t.quote }</blockquote>
                            <footer>
                                <strong>{ t.author }</strong>
                                <span>{ t.role }</span>
                            </footer>
                        </div>
                    }) }
                </div>
                <div class="swiper-pagination"></div>
            </div>
        </section>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Portfolio filter

struct PortfolioItem {
    title: &'static str,
    category: &'static str,
    image: &'static str,
}

const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Dulce Norte",
        category: "ecommerce",
        image: "img/portafolio-dulce-norte.jpg",
    },
    PortfolioItem {
        title: "Estudio Vega",
        category: "web",
        image: "img/portafolio-vega.jpg",
    },
    PortfolioItem {
        title: "Fuerza Andina",
        category: "web",
        image: "img/portafolio-fuerza-andina.jpg",
    },
    PortfolioItem {
        title: "El Tornillo",
        category: "ecommerce",
        image: "img/portafolio-el-tornillo.jpg",
    },
    PortfolioItem {
        title: "Sonría",
        category: "branding",
        image: "img/portafolio-sonria.jpg",
    },
    PortfolioItem {
        title: "Café Misti",
        category: "branding",
        image: "img/portafolio-misti.jpg",
    },
];

const FILTERS: &[(&str, &str)] = &[
    ("all", "Todos"),
    ("web", "Web"),
    ("ecommerce", "E-commerce"),
    ("branding", "Branding"),
];

/// Category-based show/hide over the portfolio grid. Matching items replay
/// a short fade every time the filter changes.
#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let active_filter = use_state_eq(|| "all");
    let faded_in = use_state_eq(|| true);
    let fade_timer = use_mut_ref(|| None::<Timeout>);

    let on_filter = {
        let active_filter = active_filter.clone();
        let faded_in = faded_in.clone();
        let fade_timer = fade_timer.clone();
        Callback::from(move |value: &'static str| {
            active_filter.set(value);
            faded_in.set(false);
            let faded_in = faded_in.clone();
            *fade_timer.borrow_mut() = Some(Timeout::new(crate::config::FILTER_FADE_MS, move || {
                faded_in.set(true);
            }));
        })
    };

    html! {
        <section id="portafolio" class="portfolio">
            <h2>{ "Portafolio" }</h2>
            <div class="portfolio-filters">
                { for FILTERS.iter().map(|&(value, label)| {
                    let onclick = {
                        let on_filter = on_filter.clone();
                        Callback::from(move |_: MouseEvent| on_filter.emit(value))
                    };
                    html! {
                        <button
                            class={classes!(
                                "filter-btn",
                                (*active_filter == value).then_some("active"),
                            )}
                            {onclick}
                        >
                            { label }
                        </button>
                    }
                }) }
            </div>
            <div class="portfolio-grid">
                { for PORTFOLIO_ITEMS.iter().map(|item| {
                    let shown = *active_filter == "all" || item.category == *active_filter;
                    let style = if shown && !*faded_in {
                        "opacity: 0"
                    } else {
                        "opacity: 1"
                    };
                    html! {
                        <figure
                            class={classes!("portfolio-item", (!shown).then_some("hidden"))}
                            {style}
                        >
                            <img src={item.image} alt={item.title} />
                            <figcaption>{ item.title }</figcaption>
                        </figure>
                    }
                }) }
            </div>
        </section>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Scroll reveal

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
}

/// Adds the `active` class once the wrapped block scrolls into view
/// (top edge above viewport height minus a fixed margin). The class is
/// never removed afterwards.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let active = use_state_eq(|| false);

    {
        let node = node.clone();
        let active = active.clone();
        use_effect_with((), move |_| {
            let check = move || {
                let Some(element) = node.cast::<web_sys::Element>() else {
                    return;
                };
                let top = element.get_bounding_client_rect().top();
                let viewport = gloo_utils::window()
                    .inner_height()
                    .ok()
                    .and_then(|height| height.as_f64())
                    .unwrap_or(0.0);
                if top < viewport - REVEAL_MARGIN {
                    active.set(true);
                }
            };
            check();
            let listener = ListenerHandle::on_window("scroll", move |_| check());
            move || drop(listener)
        });
    }

    html! {
        <div ref={node} class={classes!("reveal", (*active).then_some("active"))}>
            { props.children.clone() }
        </div>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Contact form

async fn send_opaque(url: &str) -> Result<(), JsValue> {
    let opts = RequestInit::new();
    // the relay does not answer cross-origin reads; the response stays
    // opaque and delivery is assumed
    opts.set_mode(RequestMode::NoCors);
    let request = Request::new_with_str_and_init(url, &opts)?;
    JsFuture::from(gloo_utils::window().fetch_with_request(&request)).await?;
    Ok(())
}

/// Contact form delivering submissions through the messaging relay. The
/// submit control is disabled and relabelled while a send is in flight and
/// restored afterwards whatever the outcome.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let message_ref = use_node_ref();
    let sending = use_state_eq(|| false);

    let onsubmit = {
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let message_ref = message_ref.clone();
        let sending = sending.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *sending {
                return;
            }
            if !RELAY.is_configured() {
                alert(&ContactError::NotConfigured.to_string());
                return;
            }

            let field = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let message_text = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|area| area.value())
                .unwrap_or_default();

            let submission = match ContactMessage::new(
                &field(&name_ref),
                &field(&email_ref),
                &field(&phone_ref),
                &message_text,
            ) {
                Ok(submission) => submission,
                Err(err) => {
                    alert(&err.to_string());
                    return;
                }
            };
            let url = match submission.relay_url(&RELAY) {
                Ok(url) => url,
                Err(err) => {
                    alert(&err.to_string());
                    return;
                }
            };

            sending.set(true);
            let sending = sending.clone();
            let form_ref = form_ref.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match send_opaque(&url).await {
                    Ok(()) => {
                        alert("¡Mensaje enviado correctamente a WhatsApp!");
                        if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                            form.reset();
                        }
                    }
                    Err(err) => {
                        log::error!("contact relay request failed: {:?}", err);
                        alert(&ContactError::Transport.to_string());
                    }
                }
                sending.set(false);
            });
        })
    };

    html! {
        <section id="contacto" class="contact">
            <h2>{ "Conversemos" }</h2>
            <form ref={form_ref} {onsubmit}>
                <input ref={name_ref} id="contact-name" type="text" placeholder="Nombre" />
                <input ref={email_ref} id="contact-email" type="email" placeholder="Email" />
                <input ref={phone_ref} id="contact-phone" type="tel" placeholder="Celular" />
                <textarea
                    ref={message_ref}
                    id="contact-message"
                    placeholder="Cuéntanos tu proyecto"
                />
                <button type="submit" disabled={*sending}>
                    { if *sending { "Enviando..." } else { "Enviar mensaje" } }
                </button>
            </form>
        </section>
    }
}
