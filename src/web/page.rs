pub const INDEX_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Agricheck - Plant Disease Detector</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: linear-gradient(135deg, #2f855a 0%, #9ae6b4 100%);
            min-height: 100vh;
            display: flex;
            align-items: flex-start;
            justify-content: center;
            gap: 20px;
            padding: 20px;
            flex-wrap: wrap;
        }

        .sidebar, .container {
            background: white;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.25);
            padding: 30px;
        }

        .sidebar {
            width: 280px;
        }

        .sidebar h2 {
            color: #276749;
            font-size: 1.2em;
            margin-bottom: 15px;
        }

        .sidebar ol {
            margin-left: 20px;
            color: #444;
            line-height: 1.8;
        }

        .sidebar hr {
            border: none;
            border-top: 2px solid #f0f0f0;
            margin: 20px 0;
        }

        .container {
            max-width: 800px;
            width: 100%;
        }

        h1 {
            color: #22543d;
            margin-bottom: 6px;
            font-size: 2em;
        }

        .subtitle {
            color: #666;
            margin-bottom: 25px;
            font-size: 0.95em;
        }

        .upload-area {
            border: 3px dashed #38a169;
            border-radius: 15px;
            padding: 50px 20px;
            text-align: center;
            cursor: pointer;
            transition: all 0.3s;
            background: #f0fff4;
        }

        .upload-area:hover, .upload-area.dragover {
            border-color: #276749;
            background: #e6ffed;
        }

        .upload-icon {
            font-size: 3.5em;
            margin-bottom: 15px;
        }

        .upload-text {
            color: #2f855a;
            font-size: 1.15em;
            font-weight: 600;
            margin-bottom: 8px;
        }

        .upload-hint {
            color: #999;
            font-size: 0.9em;
        }

        input[type="file"] {
            display: none;
        }

        .preview-image {
            display: none;
            max-width: 100%;
            border-radius: 10px;
            margin: 20px 0;
            box-shadow: 0 4px 15px rgba(0,0,0,0.1);
        }

        button {
            border: none;
            border-radius: 10px;
            padding: 12px 22px;
            font-size: 1em;
            font-weight: 600;
            cursor: pointer;
        }

        button:disabled {
            opacity: 0.5;
            cursor: not-allowed;
        }

        .primary {
            background: #2f855a;
            color: white;
            width: 100%;
        }

        .secondary {
            background: #f0fff4;
            color: #2f855a;
            border: 2px solid #2f855a;
            width: 100%;
        }

        .loading {
            text-align: center;
            padding: 30px;
            display: none;
            color: #555;
        }

        .spinner {
            border: 4px solid #f3f3f3;
            border-top: 4px solid #38a169;
            border-radius: 50%;
            width: 46px;
            height: 46px;
            animation: spin 1s linear infinite;
            margin: 0 auto 15px;
        }

        @keyframes spin {
            0% { transform: rotate(0deg); }
            100% { transform: rotate(360deg); }
        }

        .result {
            display: none;
            background: #f0fff4;
            border-radius: 10px;
            padding: 20px;
            margin-top: 20px;
        }

        .result.failure {
            background: #fff5f5;
            border: 2px solid #feb2b2;
        }

        .result-label {
            color: #2f855a;
            font-weight: 600;
            margin-bottom: 10px;
            font-size: 0.9em;
            text-transform: uppercase;
            letter-spacing: 1px;
        }

        .result-text {
            color: #333;
            line-height: 1.6;
            white-space: pre-wrap;
        }

        .meta-info {
            display: flex;
            justify-content: space-between;
            margin-top: 15px;
            padding-top: 15px;
            border-top: 1px solid #e0e0e0;
            font-size: 0.85em;
            color: #666;
        }

        .note {
            margin-top: 15px;
            font-size: 0.85em;
            color: #555;
            background: #ebf8ff;
            padding: 12px;
            border-radius: 8px;
        }

        .message {
            margin-top: 15px;
            font-size: 0.9em;
            color: #333;
            word-break: break-word;
        }

        .error {
            background: #fee;
            border: 2px solid #fcc;
            color: #c33;
            padding: 15px;
            border-radius: 10px;
            margin-top: 20px;
            display: none;
        }
    </style>
</head>
<body>
    <aside class="sidebar">
        <h2>🌱 About Agricheck</h2>
        <p><strong>How to use:</strong></p>
        <ol>
            <li>Take clear photo of diseased leaf</li>
            <li>Upload image</li>
            <li>Click 'Analyze Disease'</li>
            <li>Get organic treatment advice!</li>
        </ol>
        <hr>
        <button class="secondary" id="probeButton">Test Connection</button>
        <div class="message" id="probeMessage"></div>
    </aside>

    <main class="container">
        <h1>🌿 Agricheck</h1>
        <p class="subtitle">AI-Powered Plant Disease Detection for Kenyan Farmers</p>
        <p class="subtitle">Upload a clear photo of a plant leaf to identify diseases and get organic treatment advice.</p>

        <div class="upload-area" id="uploadArea">
            <div class="upload-icon">📸</div>
            <div class="upload-text">Choose an image file</div>
            <div class="upload-hint">JPG, JPEG or PNG • Take a clear photo of the diseased plant leaf</div>
            <input type="file" id="fileInput" accept=".jpg,.jpeg,.png,image/jpeg,image/png">
        </div>

        <img id="previewImage" class="preview-image" alt="Uploaded Plant Leaf">

        <button class="primary" id="analyzeButton" disabled>Analyze Disease</button>

        <div class="loading" id="loading">
            <div class="spinner"></div>
            <p>AI is analyzing the plant health... This may take 10-20 seconds.</p>
        </div>

        <div class="error" id="error"></div>

        <div class="result" id="result">
            <div class="result-label" id="resultLabel">Analysis Results</div>
            <div class="result-text" id="resultText"></div>
            <div class="meta-info">
                <span>Model: <strong id="modelName">--</strong></span>
                <span>Processing: <strong id="processingTime">--</strong>ms</span>
            </div>
            <div class="note"><strong>Remember</strong>: This is AI-assisted advice. For serious crop issues, consult local agricultural experts.</div>
        </div>
    </main>

    <script>
        const uploadArea = document.getElementById('uploadArea');
        const fileInput = document.getElementById('fileInput');
        const previewImage = document.getElementById('previewImage');
        const analyzeButton = document.getElementById('analyzeButton');
        const loading = document.getElementById('loading');
        const errorDiv = document.getElementById('error');
        const result = document.getElementById('result');
        const resultLabel = document.getElementById('resultLabel');
        const resultText = document.getElementById('resultText');
        const modelName = document.getElementById('modelName');
        const processingTime = document.getElementById('processingTime');
        const probeButton = document.getElementById('probeButton');
        const probeMessage = document.getElementById('probeMessage');

        let selectedFile = null;

        uploadArea.addEventListener('click', () => fileInput.click());

        uploadArea.addEventListener('dragover', (e) => {
            e.preventDefault();
            uploadArea.classList.add('dragover');
        });

        uploadArea.addEventListener('dragleave', () => {
            uploadArea.classList.remove('dragover');
        });

        uploadArea.addEventListener('drop', (e) => {
            e.preventDefault();
            uploadArea.classList.remove('dragover');
            const file = e.dataTransfer.files[0];
            if (file) {
                selectFile(file);
            }
        });

        fileInput.addEventListener('change', (e) => {
            const file = e.target.files[0];
            if (file) {
                selectFile(file);
            }
        });

        function escapeHtml(text) {
            return text
                .replace(/&/g, '&amp;')
                .replace(/</g, '&lt;')
                .replace(/>/g, '&gt;')
                .replace(/"/g, '&quot;')
                .replace(/'/g, '&#39;');
        }

        // Escapes first, then turns **bold** and leading "- " / "* " bullets into markup.
        function renderDiagnosis(text) {
            return escapeHtml(text)
                .split('\n')
                .map((line) => line
                    .replace(/^(\s*)[-*] /, '$1• ')
                    .replace(/\*\*(.+?)\*\*/g, '<strong>$1</strong>'))
                .join('\n');
        }

        function showError(message) {
            errorDiv.textContent = message;
            errorDiv.style.display = 'block';
        }

        function selectFile(file) {
            errorDiv.style.display = 'none';
            result.style.display = 'none';
            if (!/\.(jpe?g|png)$/i.test(file.name)) {
                showError('Please upload a jpg, jpeg or png image of a plant leaf.');
                return;
            }
            selectedFile = file;
            const reader = new FileReader();
            reader.onload = (e) => {
                previewImage.src = e.target.result;
                previewImage.style.display = 'block';
            };
            reader.readAsDataURL(file);
            analyzeButton.disabled = false;
        }

        analyzeButton.addEventListener('click', async () => {
            if (!selectedFile) {
                showError('Please upload an image of a plant leaf to get started.');
                return;
            }

            analyzeButton.disabled = true;
            loading.style.display = 'block';
            result.style.display = 'none';
            errorDiv.style.display = 'none';

            const formData = new FormData();
            formData.append('image', selectedFile);

            try {
                const response = await fetch('/api/diagnose', {
                    method: 'POST',
                    body: formData
                });
                const body = await response.json();

                if (!response.ok) {
                    throw new Error(body.error || 'Upload failed');
                }

                const ok = body.outcome === 'success';
                result.classList.toggle('failure', !ok);
                resultLabel.textContent = ok ? 'Analysis Complete!' : 'Analysis Failed';
                resultText.innerHTML = ok ? renderDiagnosis(body.text) : escapeHtml(body.text);
                modelName.textContent = body.model;
                processingTime.textContent = body.processing_time_ms;
                result.style.display = 'block';
            } catch (error) {
                showError(error.message);
            } finally {
                loading.style.display = 'none';
                analyzeButton.disabled = false;
            }
        });

        probeButton.addEventListener('click', async () => {
            probeButton.disabled = true;
            probeMessage.textContent = 'Checking...';
            try {
                const response = await fetch('/api/probe', { method: 'POST' });
                const body = await response.json();
                probeMessage.textContent = body.message;
            } catch (error) {
                probeMessage.textContent = 'API Failed: ' + error.message;
            } finally {
                probeButton.disabled = false;
            }
        });
    </script>
</body>
</html>
"#;
