// Fixed HTML viewer wrapper around a plate SVG. Nothing here is computed:
// the template only gets the plate number and the diagram text substituted in.
use crate::presentation::svg_document::OSD_MAX_ZOOM_PIXEL_RATIO;

const VIEWER_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang='en'>
<head>
  <title>Plate ${plate}</title>
  <meta charset='UTF-8'>
  <meta name='viewport' content='width=device-width, initial-scale=1.0'>
  <link href='https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/css/bootstrap.min.css' rel='stylesheet' integrity='sha384-1BmE4kWBq78iYhFldvKuhfTAU6auU8tT94WrHftjDbrCEXSU1oBoqyl2QvZ6jIW3' crossorigin='anonymous'>
  <script src='https://ajax.googleapis.com/ajax/libs/jquery/3.6.0/jquery.min.js'></script>
  <script src='https://cdnjs.cloudflare.com/ajax/libs/openseadragon/3.0.0/openseadragon.min.js' integrity='sha512-Dq5iZeGNxm7Ql/Ix10sugr98niMRyuObKlIzKN1SzUysEXBxti479CTsCiTV00gFlDeDO3zhBsyCOO+v6QVwJw==' crossorigin='anonymous' referrerpolicy='no-referrer'></script>
  <script src='https://openseadragon.github.io/svg-overlay/openseadragon-svg-overlay.js'></script>
  <style>
    #headerWrapper {
      height: fit-content;
      position: sticky;
      top: 0;
      display: grid;
      z-index: 1;
    }
    #headerBackgroundBox {
      background-color: rgb(46, 46, 46);
      margin: auto;
      padding: 10px 20px;
    }
    .headerText {
      display: flex;
      justify-content: center;
      align-items: center;
      white-space: nowrap;
      font-size: 20px;
      color: rgb(220, 220, 220);
      padding: 0px 5px;
    }
    #plateKey {
      display: flex;
      justify-content: center;
      max-width: 480px;
      height: 30px;
      margin: 5px 0px;
    }
    .keyItem {
      display: flex;
      justify-content: center;
      align-items: center;
      margin: 0px 20px;
    }
    .keyDot {
      min-width: 20px;
      min-height: 30px;
    }
    .keyText {
      padding-left: 10px;
      padding-right: 10px;
      color: rgb(220, 220, 220);
    }
    #plateButtonBox {
      display: flex;
      justify-content: center;
      padding-top: 5px;
    }
    .plateButton {
      margin: 0px 20px;
      background-color: lightgray;
      border-radius: 8px;
    }
    #plateNumberDisplay {
      position: relative;
      top: 20px;
      margin-left: 20px;
      font-size: 20px;
      color: rgb(215,215,215);
      z-index: 1;
    }
    #openSeaDragonWrapper {
      width: 100%;
    }
    .plateflipped {
      transform: scaleX(-1);
    }
  </style>
</head>
<body style='background-color:rgb(0,0,0);'>
  <div class='container'>
    <div id='headerWrapper'>
      <div id='headerBackgroundBox'>
        <div id='headerTextBox'>
          <div class='headerText'>Zoom, Pan, and Explore.</div>
          <div class='headerText'>Tap a Dot to Learn More.</div>
        </div>
        <div id='plateKey'>
          <div class='keyItem'>
            <svg class='keyDot' width='auto' height='100%' viewBox='0 0 50 50'>
              <circle cx='25' cy='25' r='20px' stroke='rgb(255,0,132)' stroke-width='10px' fill='rgb(255,255,255)'/>
            </svg>
            <div class='keyText'>Galaxy</div>
          </div>
          <div class='keyItem'>
            <svg class='keyDot' width='auto' height='100%' viewBox='0 0 50 50'>
              <circle cx='25' cy='25' r='20px' stroke='rgb(0,181,255)' stroke-width='10px' fill='rgb(255,255,255)'/>
            </svg>
            <div class='keyText'>Star</div>
          </div>
          <div class='keyItem'>
            <svg class='keyDot' width='auto' height='100%' viewBox='0 0 50 50'>
              <circle cx='25' cy='25' r='20px' stroke='rgb(102,255,0)' stroke-width='10px' fill='rgb(255,255,255)'/>
            </svg>
            <div class='keyText'>Quasar</div>
          </div>
        </div>
        <div id='plateButtonBox'>
          <button id='plateResetPanZoomButton' class='plateButton'>Reset: Pan &amp; Zoom</button>
          <button id='plateFlipButton' class='plateButton'>Flip Plate</button>
        </div>
      </div>
    </div>
  </div>
  <div id='openSeaDragonWrapper'>
    <div class='container'>
      <div id='plateNumberDisplay'>Plate ${plate}</div>
    </div>
  </div>
  <div id='svgWrapper' style='display: flex; justify-content: center; align-items: center'>
${svg}
  </div>
  <script>
    $(window).resize(function() {
      $('#svgImage').height((visualViewport.height - $('#headerWrapper').height()));
      $('#openSeaDragonWrapper').height((visualViewport.height - $('#headerWrapper').height()) - 20);
    }).resize();

    var viewer = OpenSeadragon({
      element: document.getElementById('openSeaDragonWrapper'),
      showNavigationControl: false,
      maxZoomPixelRatio: ${maxZoomPixelRatio},
      zoomPerScroll: 2,
      tileSources: [{
        type: 'image',
        url: 'data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=',
        buildPyramid: false
      }]
    });
    var overlay = viewer.svgOverlay();
    overlay.node().appendChild(document.getElementById('svgImage'));

    $('#plateResetPanZoomButton').click(function() {
      viewer.viewport.goHome();
    });

    $('#plateFlipButton').click(function() {
      if ($('#svgWrapper').hasClass('plateflipped')) {
        $('#svgWrapper').removeClass('plateflipped');
        $('#plateFlipButton').css('background-color', 'lightgray');
      } else {
        $('#svgWrapper').addClass('plateflipped');
        $('#plateFlipButton').css('background-color', 'rgb(134, 134, 134)');
      }
    });
  </script>
</body>
</html>
"#;

/// Embed a rendered plate diagram in the pan/zoom viewer page.
pub fn render_viewer_page(plate_number: &str, svg: &str) -> String {
    VIEWER_TEMPLATE
        .replace("${plate}", plate_number)
        .replace("${svg}", svg)
        .replace(
            "${maxZoomPixelRatio}",
            &OSD_MAX_ZOOM_PIXEL_RATIO.to_string(),
        )
}
