use crate::translate::languages::SUPPORTED_LANGUAGES;
use crate::translate::PLACEHOLDER_LANGUAGE;

// {language_options}, {language_codes} and {placeholder} are placeholders
// for string replacement, filled in by render_page
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>LLM Translator Demo</title>
    <link
      rel="stylesheet"
      href="https://stackpath.bootstrapcdn.com/bootstrap/4.5.2/css/bootstrap.min.css"
    />
    <style>
        body {
            background-color: #f8f9fa;
        }
        .translator-container {
            margin-top: 50px;
        }
        .card {
            border-radius: 15px;
        }
        .translate-button {
            width: 100%;
            font-size: 18px;
            padding: 10px;
        }
        #loading {
            display: none;
            text-align: center;
            margin-top: 20px;
        }
        .fade-in {
            animation: fadeIn 0.5s;
        }
        @keyframes fadeIn {
            from { opacity: 0; }
            to { opacity: 1; }
        }
        .custom-select, .form-control {
            height: calc(2.25rem + 12px);
            border-radius: 0.5rem;
        }
        .textarea-resize-none {
            resize: none;
        }
        ul li {
            display: inline;
            margin: 0 15px;
            transition: transform 0.2s ease, color 0.2s;
        }
        ul li:hover {
            transform: scale(1.2);
            color: #337ab7;
            cursor: pointer;
            text-decoration: underline;
        }
    </style>
</head>
<body>
    <div class="container translator-container">
        <h1 class="text-center mb-5">LLM-Powered Translator Demo</h1>
        <p>LLMs can recognize that "Break a leg" is an idiomatic expression meaning "Good luck" and provide an equivalent expression in the target language.</p>
        <p>
            Here are some other examples:
            <ul>
                <li onclick="copyToInput(this.innerText)">Kick the bucket</li>
                <li onclick="copyToInput(this.innerText)">Under the weather</li>
                <li onclick="copyToInput(this.innerText)">Costs an arm and a leg</li>
                <li onclick="copyToInput(this.innerText)">Let the cat out of the bag</li>
            </ul>
        </p>
        <div class="row">
            <div class="col-md-5">
                <div class="card shadow-sm">
                    <div class="card-body">
                        <div class="d-flex justify-content-between align-items-center">
                            <h5 class="card-title mb-0">Source Text</h5>
                            <select id="source_language" class="custom-select w-auto">
                                {language_options}
                            </select>
                        </div>
                        <textarea id="source_text" class="form-control textarea-resize-none mt-3" rows="10" placeholder="Enter text here...">Break a leg!</textarea>
                    </div>
                </div>
            </div>
            <div class="col-md-2 text-center my-auto">
                <button id="swap_languages" class="btn btn-outline-secondary btn-lg mb-3" disabled>&#8644;</button>
            </div>
            <div class="col-md-5">
                <div class="card shadow-sm">
                    <div class="card-body">
                        <div class="d-flex justify-content-between align-items-center">
                            <h5 class="card-title mb-0">Translated Text</h5>
                            <select id="target_language" class="custom-select w-auto">
                                {language_options}
                            </select>
                        </div>
                        <textarea id="translated_text" class="form-control textarea-resize-none mt-3" rows="10" placeholder="Translation will appear here..." readonly></textarea>
                    </div>
                </div>
            </div>
        </div>
        <div class="row mt-4">
            <div class="col text-center">
                <button class="btn btn-primary translate-button" id="translate_button">Translate</button>
                <button class="btn btn-outline-secondary translate-button mt-2" id="google_translate_button">Compare on Google Translate</button>
            </div>
        </div>
        <div id="loading">
            <div class="spinner-border text-primary" role="status">
              <span class="sr-only">Translating...</span>
            </div>
            <p class="mt-2">Translating...</p>
        </div>
    </div>
    <script>
        var PLACEHOLDER = "{placeholder}";
        var LANGUAGE_CODES = {language_codes};

        function copyToInput(text) {
            document.getElementById('source_text').value = text;
        }

        // Rebuild the target dropdown without the chosen source language
        function refreshTargetOptions() {
            var source = document.getElementById('source_language').value;
            var target = document.getElementById('target_language');
            var previous = target.value;

            target.innerHTML = '';
            var names = [PLACEHOLDER].concat(Object.keys(LANGUAGE_CODES));
            names.forEach(function(name) {
                if (name !== PLACEHOLDER && name === source) {
                    return;
                }
                var option = document.createElement('option');
                option.textContent = name;
                if (name === previous) {
                    option.selected = true;
                }
                target.appendChild(option);
            });
        }

        document.getElementById('source_language').addEventListener('change', refreshTargetOptions);

        document.getElementById('translate_button').addEventListener('click', function() {
            var sourceText = document.getElementById('source_text').value.trim();
            var sourceLanguage = document.getElementById('source_language').value;
            var targetLanguage = document.getElementById('target_language').value;

            if (sourceText === '') {
                document.getElementById('source_text').classList.add('is-invalid');
                return;
            }
            document.getElementById('source_text').classList.remove('is-invalid');

            document.getElementById('translated_text').value = '';
            document.getElementById('loading').style.display = 'block';

            fetch('/translate', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({
                    source_text: sourceText,
                    source_language: sourceLanguage,
                    target_language: targetLanguage
                })
            })
            .then(function(response) {
                if (!response.ok) {
                    return response.json().then(function(body) {
                        throw new Error(body.error || response.statusText);
                    });
                }
                return response.json();
            })
            .then(function(body) {
                document.getElementById('loading').style.display = 'none';
                var output = document.getElementById('translated_text');
                output.value = body.translated;
                output.classList.add('fade-in');
            })
            .catch(function(err) {
                document.getElementById('loading').style.display = 'none';
                alert('An error occurred while translating: ' + err.message);
            });
        });

        document.getElementById('google_translate_button').addEventListener('click', function() {
            var sourceLanguage = document.getElementById('source_language').value;
            var targetLanguage = document.getElementById('target_language').value;
            var sl = LANGUAGE_CODES[sourceLanguage] || 'auto';
            var tl = LANGUAGE_CODES[targetLanguage] || 'en';
            var text = document.getElementById('source_text').value.trim();

            var url = 'https://translate.google.com/?hl=en'
                + '&sl=' + encodeURIComponent(sl)
                + '&tl=' + encodeURIComponent(tl)
                + '&text=' + encodeURIComponent(text)
                + '&op=translate';
            window.open(url, '_blank');
        });

        document.getElementById('source_text').addEventListener('input', function() {
            if (this.value.trim() !== '') {
                this.classList.remove('is-invalid');
            }
        });

        refreshTargetOptions();
    </script>
</body>
</html>
"#;

/// Render the demo page with the supported language list baked in.
pub fn render_page() -> String {
    let mut options = format!("<option selected>{PLACEHOLDER_LANGUAGE}</option>\n");
    for (name, _) in SUPPORTED_LANGUAGES {
        options.push_str(&format!("                                <option>{name}</option>\n"));
    }

    // Built by hand to keep the table's order in the dropdowns
    let codes_json = format!(
        "{{{}}}",
        SUPPORTED_LANGUAGES
            .iter()
            .map(|(name, code)| format!("\"{name}\":\"{code}\""))
            .collect::<Vec<_>>()
            .join(",")
    );

    PAGE_TEMPLATE
        .replace("{language_options}", options.trim_end())
        .replace("{language_codes}", &codes_json)
        .replace("{placeholder}", PLACEHOLDER_LANGUAGE)
}
