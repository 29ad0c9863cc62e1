// PBIX Analyzer - core/i18n.rs
//
// Dictionary-based localisation over the three supported interface locales.
// A static key -> string table; the lookup is total, so no fallback path
// exists and every key renders in every language.

// =============================================================================
// Language
// =============================================================================

/// Supported interface locales. Portuguese (Brazil) is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Pt,
    En,
    Es,
}

impl Language {
    /// All locales in selector display order.
    pub fn all() -> &'static [Language] {
        &[Language::Pt, Language::En, Language::Es]
    }

    /// Two-letter locale code, as accepted on the CLI and in config.toml.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Native display name for the language selector.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Pt => "Português BR",
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    /// Flag emoji for the language selector.
    pub fn flag(&self) -> &'static str {
        match self {
            Language::Pt => "\u{1f1e7}\u{1f1f7}",
            Language::En => "\u{1f1fa}\u{1f1f8}",
            Language::Es => "\u{1f1ea}\u{1f1f8}",
        }
    }

    /// Parse a locale code (case-insensitive). Returns `None` for anything
    /// other than the three supported locales.
    pub fn from_code(code: &str) -> Option<Language> {
        match code.to_ascii_lowercase().as_str() {
            "pt" => Some(Language::Pt),
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }
}

// =============================================================================
// Text keys
// =============================================================================

/// One variant per user-visible translatable string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    // Hero and header
    Title,
    Subtitle,
    SystemOnline,
    RealtimeProcessing,

    // Upload widget
    UploadArea,
    MaxSize,
    SupportedFormat,
    FileSelected,
    Analyze,
    Analyzing,
    Processing,
    Cancel,

    // Validation and failure surfaces
    FileTooLarge,
    InvalidFileType,
    AnalysisFailed,
    AnalysisCancelled,

    // Results widget
    AnalysisComplete,
    AnalysisResults,
    Tables,
    Measures,
    Columns,
    Relationships,
    ExportDataTitle,
    ExportDataDesc,
    ExportExcel,
    ExportStarted,
    ExportDone,
    NewAnalysis,

    // Feature cards
    Features,
    FeaturesIntro,
    Feature1,
    Feature1Desc,
    Feature2,
    Feature2Desc,
    Feature3,
    Feature3Desc,

    // Status bar
    Ready,
}

impl TextKey {
    /// All keys, for completeness checks in tests.
    pub fn all() -> &'static [TextKey] {
        use TextKey::*;
        &[
            Title,
            Subtitle,
            SystemOnline,
            RealtimeProcessing,
            UploadArea,
            MaxSize,
            SupportedFormat,
            FileSelected,
            Analyze,
            Analyzing,
            Processing,
            Cancel,
            FileTooLarge,
            InvalidFileType,
            AnalysisFailed,
            AnalysisCancelled,
            AnalysisComplete,
            AnalysisResults,
            Tables,
            Measures,
            Columns,
            Relationships,
            ExportDataTitle,
            ExportDataDesc,
            ExportExcel,
            ExportStarted,
            ExportDone,
            NewAnalysis,
            Features,
            FeaturesIntro,
            Feature1,
            Feature1Desc,
            Feature2,
            Feature2Desc,
            Feature3,
            Feature3Desc,
            Ready,
        ]
    }
}

// =============================================================================
// Lookup
// =============================================================================

/// Localised string for `key` in `language`. Total over both enums.
pub fn tr(key: TextKey, language: Language) -> &'static str {
    let [pt, en, es] = translations(key);
    match language {
        Language::Pt => pt,
        Language::En => en,
        Language::Es => es,
    }
}

/// The [pt, en, es] triple for a key.
fn translations(key: TextKey) -> [&'static str; 3] {
    match key {
        TextKey::Title => ["Analisador PBIX", "PBIX Analyzer", "Analizador PBIX"],
        TextKey::Subtitle => [
            "Extraia e analise dados de arquivos Power BI",
            "Extract and analyze data from Power BI files",
            "Extraer y analizar datos de archivos Power BI",
        ],
        TextKey::SystemOnline => [
            "Sistema online e seguro",
            "System online and secure",
            "Sistema en línea y seguro",
        ],
        TextKey::RealtimeProcessing => [
            "Processamento em tempo real",
            "Real-time processing",
            "Procesamiento en tiempo real",
        ],
        TextKey::UploadArea => [
            "Arraste e solte seu arquivo .PBIX aqui ou clique para selecionar",
            "Drag and drop your .PBIX file here or click to select",
            "Arrastra y suelta tu archivo .PBIX aquí o haz clic para seleccionar",
        ],
        TextKey::MaxSize => [
            "Tamanho máximo: 200MB",
            "Maximum size: 200MB",
            "Tamaño máximo: 200MB",
        ],
        TextKey::SupportedFormat => [
            "Formato suportado: .PBIX",
            "Supported format: .PBIX",
            "Formato soportado: .PBIX",
        ],
        TextKey::FileSelected => [
            "Arquivo selecionado",
            "File selected",
            "Archivo seleccionado",
        ],
        TextKey::Analyze => ["Analisar Arquivo", "Analyze File", "Analizar Archivo"],
        TextKey::Analyzing => ["Analisando...", "Analyzing...", "Analizando..."],
        TextKey::Processing => [
            "Processando arquivo...",
            "Processing file...",
            "Procesando archivo...",
        ],
        TextKey::Cancel => ["Cancelar", "Cancel", "Cancelar"],
        TextKey::FileTooLarge => [
            "Arquivo muito grande. Tamanho máximo: 200MB",
            "File too large. Maximum size: 200MB",
            "Archivo demasiado grande. Tamaño máximo: 200MB",
        ],
        TextKey::InvalidFileType => [
            "Tipo de arquivo inválido. Apenas arquivos .PBIX são aceitos",
            "Invalid file type. Only .PBIX files are accepted",
            "Tipo de archivo inválido. Solo se aceptan archivos .PBIX",
        ],
        TextKey::AnalysisFailed => [
            "Erro durante a análise do arquivo",
            "Error while analyzing the file",
            "Error durante el análisis del archivo",
        ],
        TextKey::AnalysisCancelled => [
            "Análise cancelada.",
            "Analysis cancelled.",
            "Análisis cancelado.",
        ],
        TextKey::AnalysisComplete => [
            "Análise concluída com sucesso!",
            "Analysis completed successfully!",
            "¡Análisis completado exitosamente!",
        ],
        TextKey::AnalysisResults => [
            "Resultados da Análise",
            "Analysis Results",
            "Resultados del Análisis",
        ],
        TextKey::Tables => ["Tabelas", "Tables", "Tablas"],
        TextKey::Measures => ["Medidas", "Measures", "Medidas"],
        TextKey::Columns => ["Colunas", "Columns", "Columnas"],
        TextKey::Relationships => ["Relacionamentos", "Relationships", "Relaciones"],
        TextKey::ExportDataTitle => ["Exportar Dados", "Export Data", "Exportar Datos"],
        TextKey::ExportDataDesc => [
            "Baixe os dados extraídos em formato Excel para análise detalhada",
            "Download the extracted data in Excel format for detailed analysis",
            "Descarga los datos extraídos en formato Excel para un análisis detallado",
        ],
        TextKey::ExportExcel => [
            "Exportar para Excel",
            "Export to Excel",
            "Exportar a Excel",
        ],
        TextKey::ExportStarted => [
            "Exportação iniciada! O download começará em breve.",
            "Export started! The download will begin shortly.",
            "¡Exportación iniciada! La descarga comenzará pronto.",
        ],
        TextKey::ExportDone => [
            "Arquivo Excel gerado com sucesso!",
            "Excel file generated successfully!",
            "¡Archivo Excel generado exitosamente!",
        ],
        TextKey::NewAnalysis => ["Nova Análise", "New Analysis", "Nuevo Análisis"],
        TextKey::Features => ["Recursos", "Features", "Características"],
        TextKey::FeaturesIntro => [
            "Nossa plataforma oferece análise avançada e segura de arquivos Power BI com tecnologia de ponta",
            "Our platform offers advanced, secure Power BI file analysis with cutting-edge technology",
            "Nuestra plataforma ofrece análisis avanzado y seguro de archivos Power BI con tecnología de punta",
        ],
        TextKey::Feature1 => ["Análise Rápida", "Fast Analysis", "Análisis Rápido"],
        TextKey::Feature1Desc => [
            "Processamento eficiente de arquivos PBIX",
            "Efficient processing of PBIX files",
            "Procesamiento eficiente de archivos PBIX",
        ],
        TextKey::Feature2 => ["Exportação Excel", "Excel Export", "Exportación Excel"],
        TextKey::Feature2Desc => [
            "Exporte dados extraídos diretamente para Excel",
            "Export extracted data directly to Excel",
            "Exportar datos extraídos directamente a Excel",
        ],
        TextKey::Feature3 => [
            "Processamento Seguro",
            "Secure Processing",
            "Procesamiento Seguro",
        ],
        TextKey::Feature3Desc => [
            "Seus arquivos são processados com segurança",
            "Your files are processed securely",
            "Tus archivos se procesan de forma segura",
        ],
        TextKey::Ready => [
            "Pronto. Selecione um arquivo .PBIX para começar.",
            "Ready. Select a .PBIX file to begin.",
            "Listo. Selecciona un archivo .PBIX para comenzar.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_resolves_in_every_language() {
        for &key in TextKey::all() {
            for &lang in Language::all() {
                assert!(
                    !tr(key, lang).is_empty(),
                    "empty translation for {key:?} in {lang:?}"
                );
            }
        }
    }

    #[test]
    fn locales_differ_where_the_dictionary_differs() {
        assert_eq!(tr(TextKey::Title, Language::Pt), "Analisador PBIX");
        assert_eq!(tr(TextKey::Title, Language::En), "PBIX Analyzer");
        assert_eq!(tr(TextKey::Title, Language::Es), "Analizador PBIX");

        assert_eq!(tr(TextKey::Features, Language::Pt), "Recursos");
        assert_eq!(tr(TextKey::Features, Language::En), "Features");
        assert_eq!(tr(TextKey::Features, Language::Es), "Características");
    }

    #[test]
    fn code_round_trip() {
        for &lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("PT"), Some(Language::Pt));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }
}
