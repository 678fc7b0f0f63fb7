use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist. The case study you're after may have moved."}</p>
            <Link<Route> to={Route::Home} classes="not-found-home">
                {"Back to the portfolio"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        text-align: center;
                        padding: 2rem;
                        background: #000;
                        color: #fff;
                    }
                    .not-found h1 {
                        font-size: 5rem;
                        margin: 0;
                    }
                    .not-found p {
                        color: #9ca3af;
                    }
                    .not-found-home {
                        color: #60a5fa;
                    }
                "#}
            </style>
        </div>
    }
}
