use maud::{DOCTYPE, Markup, PreEscaped, html};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const ERROR_BANNER: &str =
    "hidden mt-6 rounded-md border border-red-200 bg-red-50 p-4 text-sm text-red-700";

const BUTTON: &str = "w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white \
                      hover:bg-blue-700 disabled:cursor-not-allowed disabled:bg-gray-300";

// Client state is just the loaded movie and its summary. Error bodies are shown as
// "<status> - <detail>" without interpretation.
const DASHBOARD_JS: &str = r#"
const state = { movie: null, summary: null };
const $ = (id) => document.getElementById(id);

function showError(message) {
  const el = $("error");
  el.textContent = message;
  el.classList.remove("hidden");
}

async function failure(prefix, resp) {
  let detail = await resp.text();
  try { detail = JSON.parse(detail).detail ?? detail; } catch (_) {}
  showError(`${prefix}: ${resp.status} - ${detail}`);
}

function render() {
  $("error").classList.add("hidden");
  $("summary-button").disabled = state.movie === null;
  $("empty").classList.toggle("hidden", state.movie !== null);
  $("movie").classList.toggle("hidden", state.movie === null);
  $("summary-panel").classList.toggle("hidden", state.summary === null);
  if (state.movie) {
    const m = state.movie;
    $("movie-heading").textContent = `${m.title} (${m.year})`;
    $("movie-director").textContent = m.director;
    $("movie-year").textContent = m.year;
    const list = $("movie-actors");
    list.replaceChildren(...m.actors.map((a) => {
      const li = document.createElement("li");
      li.textContent = a.actor_name;
      return li;
    }));
  }
  if (state.summary !== null) $("summary-text").textContent = state.summary;
}

async function randomMovie() {
  try {
    const resp = await fetch(`${API_URL}/movies/random/`);
    if (!resp.ok) return failure("Error fetching movie", resp);
    state.movie = await resp.json();
    state.summary = null;
    render();
  } catch (e) {
    showError(`Error connecting to the API: ${e}`);
  }
}

async function movieSummary() {
  if (!state.movie) return;
  try {
    const resp = await fetch(`${API_URL}/generate_summary/`, {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ movie_id: state.movie.id }),
    });
    if (!resp.ok) return failure("Error getting summary", resp);
    state.summary = (await resp.json()).summary_text;
    render();
  } catch (e) {
    showError(`Error connecting to the API: ${e}`);
  }
}

$("random-button").addEventListener("click", randomMovie);
$("summary-button").addEventListener("click", movieSummary);
"#;

pub fn dashboard_page(api_url: &str) -> String {
    let api_url_js = js_string(api_url);
    let create_url = if api_url.is_empty() {
        "/movies/".to_string()
    } else {
        format!("{api_url}/movies/")
    };

    page(
        "Movie Explorer",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    h1 class="text-3xl font-bold text-gray-900" { "Movie & Actor Explorer" }
                    p class="mt-2 text-gray-600" {
                        "Click the button below to discover a random movie and its actors."
                    }

                    div class="mt-8 grid grid-cols-3 gap-4" {
                        button id="random-button" class=(BUTTON) type="button" {
                            "Show Random Movie"
                        }
                        button id="summary-button" class=(BUTTON) type="button" disabled {
                            "Get Summary"
                        }
                    }

                    div id="error" class=(ERROR_BANNER) {}

                    div id="empty" class="mt-8 rounded-md bg-blue-50 p-4 text-blue-800" {
                        "Click 'Show Random Movie' to get started!"
                    }

                    (movie_panel())

                    hr class="mt-12 border-gray-200";
                    p class="mt-4 text-sm text-gray-500" {
                        "Note: add movies through the API first using the "
                        code { "POST " (create_url) }
                        " endpoint, or run the "
                        code { "seed" }
                        " tool."
                    }
                }
            }
            script {
                (PreEscaped(format!("const API_URL = {api_url_js};")))
                (PreEscaped(DASHBOARD_JS))
            }
        },
    )
}

/// JSON-quotes `value` for an inline script; `<` is escaped so `</script>` cannot close it.
fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c")
}

fn movie_panel() -> Markup {
    html! {
        div id="movie" class="hidden mt-8 bg-white shadow rounded-lg p-8" {
            h2 id="movie-heading" class="text-2xl font-bold text-gray-900" {}
            div class="mt-6 grid gap-6 md:grid-cols-3" {
                div {
                    h3 class="text-lg font-semibold text-gray-800" { "Movie Details" }
                    p class="mt-2 text-gray-700" {
                        span class="font-semibold" { "Director: " }
                        span id="movie-director" {}
                    }
                    p class="mt-1 text-gray-700" {
                        span class="font-semibold" { "Year: " }
                        span id="movie-year" {}
                    }
                }
                div class="md:col-span-2" {
                    h3 class="text-lg font-semibold text-gray-800" { "Starring" }
                    ul id="movie-actors" class="mt-2 list-disc pl-5 text-gray-700" {}
                }
            }
            div id="summary-panel" class="hidden mt-8" {
                h3 class="text-lg font-semibold text-gray-800" { "Movie Summary" }
                p id="summary-text" class="mt-2 rounded-md bg-blue-50 p-4 text-blue-900" {}
            }
        }
    }
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}
