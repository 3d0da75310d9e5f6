//! 葡萄牙语翻译 (pt-BR)

use super::keys::{
    ActionTexts, CommonTexts, ErrorTexts, HelpActionTexts, HelpTexts, HintTexts, KeyNames,
    LanguageTexts, LookupTexts, NavTexts, RecordFieldTexts, SettingsTexts, StatusBarTexts,
    ThemeTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Consulta CNPJ",
        quit: "Sair",
        close: "Fechar",
        not_informed: "Não informado",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            copy: "Alt+c",
            clear: "Ctrl+u",
            help: "?",
            quit: "Alt+q",
        },
        actions: ActionTexts {
            navigate: "Navegar",
            open: "Abrir",
            switch_option: "Alternar",
            switch_panel: "Trocar painel",
            move_up_down: "Mover",
            search: "Buscar",
            copy: "Copiar",
            clear: "Limpar",
            help: "Ajuda",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        lookup: "Consulta",
        settings: "Configurações",
    },

    // ========================================================================
    // 查询页面
    // ========================================================================
    lookup: LookupTexts {
        title: "Consulta CNPJ & Empresas",
        subtitle: "Digite o CNPJ para dados oficiais ou o nome da empresa para buscar",
        placeholder: "Digite o CNPJ ou Nome da Empresa...",
        name_hint: "Buscas por nome requerem confirmação externa. Pressione Enter para buscar no Google.",
        search_web: "Buscar no Google",
        query_api: "Consultar API",
        searching: "Consultando...",
        copy_data: "Copiar dados",
        copied: "Copiado!",
        fields: RecordFieldTexts {
            company: "Empresa",
            legal_name: "Razão social",
            cnpj: "CNPJ",
            address: "Endereço",
            phone: "Telefone",
            activity_start: "Início da atividade",
            primary_activity: "Atividade principal",
            partners: "Quadro de sócios",
            more_partners_prefix: "+ outros",
            more_partners_suffix: "sócios",
        },
    },

    // ========================================================================
    // 查询错误
    // ========================================================================
    errors: ErrorTexts {
        validation: "Para buscar direto, digite um CNPJ válido (14 números). Para nomes, clique em \"Buscar no Google\".",
        not_found: "CNPJ não encontrado na base oficial.",
        rate_limited: "Muitas requisições. Espere um pouco.",
        fetch_failed: "Erro ao buscar dados.",
        unexpected: "Erro inesperado.",
        browser_failed: "Não foi possível abrir o navegador",
    },

    // ========================================================================
    // 设置页面
    // ========================================================================
    settings: SettingsTexts {
        title: "Configurações",
        theme: ThemeTexts {
            label: "Tema",
            dark: "Escuro",
            light: "Claro",
        },
        language: LanguageTexts { label: "Idioma" },
        registry: "API de consulta",
        search_engine: "Busca na web",
        config_file: "Arquivo de configuração",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        web_search_opened: "Busca aberta no navegador",
        clipboard_failed: "Falha ao copiar para a área de transferência",
        config_save_failed: "Falha ao salvar as configurações",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Ajuda",
        global_shortcuts: "Atalhos globais",
        lookup_shortcuts: "Atalhos da consulta",
        close_hint: "Pressione Esc para fechar a ajuda",
        actions: HelpActionTexts {
            switch_panel: "Trocar painel",
            move_up_down: "Mover para cima/baixo",
            confirm: "Confirmar",
            close: "Fechar",
            quit: "Sair",
            search: "Buscar",
            clear: "Limpar campo",
            copy: "Copiar dados da empresa",
        },
    },
};
